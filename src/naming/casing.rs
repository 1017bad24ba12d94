//! Casing composer
//!
//! Folds candidate tokens, one sub-word at a time, into a single identifier
//! following a [`CasingKind`] and an [`AcronymKind`]. Every function here is
//! pure: the decided prefix is the only state carried between calls.
//!
//! ```ignore
//! use codic_namer::naming::{AcronymKind, CasingKind, compose};
//!
//! let first = compose(CasingKind::Camel, AcronymKind::None, "", "User");
//! let name = compose(CasingKind::Camel, AcronymKind::None, &first, "name");
//! assert_eq!(name, "userName");
//! ```

use crate::naming::query::{AcronymKind, CasingKind};

/// A token is an acronym when it has upper-case letters and no lower-case ones
pub fn is_acronym(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// Leading capital followed by a lower-case tail: `hTML` → `Html`
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Apply the acronym rules, or plain capitalization for regular words
fn shape_token(acronym_style: AcronymKind, token: &str) -> String {
    if !is_acronym(token) {
        return capitalize(token);
    }
    match acronym_style {
        AcronymKind::MsNamingGuidelines if token.chars().count() <= 2 => token.to_string(),
        AcronymKind::MsNamingGuidelines | AcronymKind::CamelStrict => capitalize(token),
        AcronymKind::Literal | AcronymKind::None => token.to_string(),
    }
}

fn join(decided: &str, separator: &str, token: &str) -> String {
    if decided.is_empty() {
        token.to_string()
    } else {
        format!("{}{}{}", decided, separator, token)
    }
}

/// Append one sub-word to the decided prefix
///
/// `token` must be a single word; use [`compose_candidate`] for candidates that
/// may contain spaces. The acronym style is ignored unless `casing` is camel or
/// pascal.
pub fn compose(
    casing: CasingKind,
    acronym_style: AcronymKind,
    decided: &str,
    token: &str,
) -> String {
    let acronym_style = acronym_style.effective_for(casing);
    let shaped = shape_token(acronym_style, token);

    match casing {
        CasingKind::Camel if decided.is_empty() => shaped.to_lowercase(),
        CasingKind::Camel | CasingKind::Pascal => format!("{}{}", decided, shaped),
        CasingKind::LowerUnderscore => join(decided, "_", &shaped.to_lowercase()),
        CasingKind::UpperUnderscore => join(decided, "_", &shaped.to_uppercase()),
        CasingKind::Hyphen => {
            let shaped = if is_acronym(token) {
                shaped
            } else {
                shaped.to_lowercase()
            };
            join(decided, "-", &shaped)
        }
        CasingKind::None => join(decided, " ", &shaped),
    }
}

/// Fold every whitespace-separated sub-word of `candidate` onto `decided`
pub fn compose_candidate(
    casing: CasingKind,
    acronym_style: AcronymKind,
    decided: &str,
    candidate: &str,
) -> String {
    candidate
        .split_whitespace()
        .fold(decided.to_string(), |prefix, token| {
            compose(casing, acronym_style, &prefix, token)
        })
}

/// Fold a sequence of candidates, left to right, onto `decided`
pub fn compose_all<'a, I>(
    casing: CasingKind,
    acronym_style: AcronymKind,
    decided: &str,
    candidates: I,
) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .fold(decided.to_string(), |prefix, candidate| {
            compose_candidate(casing, acronym_style, &prefix, candidate)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CASINGS: [CasingKind; 6] = [
        CasingKind::Camel,
        CasingKind::Pascal,
        CasingKind::LowerUnderscore,
        CasingKind::UpperUnderscore,
        CasingKind::Hyphen,
        CasingKind::None,
    ];

    // ========== Acronym Detection ==========

    #[test]
    fn test_is_acronym() {
        assert!(is_acronym("ID"));
        assert!(is_acronym("HTML5"));
        assert!(is_acronym("A"));
        assert!(!is_acronym("Html"));
        assert!(!is_acronym("42"));
        assert!(!is_acronym(""));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hTML"), "Html");
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    // ========== Acronym Rule Table ==========

    #[test]
    fn test_ms_naming_keeps_short_acronyms() {
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::MsNamingGuidelines, "", "ID"),
            "ID"
        );
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::MsNamingGuidelines, "User", "ID"),
            "UserID"
        );
    }

    #[test]
    fn test_ms_naming_capitalizes_long_acronyms() {
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::MsNamingGuidelines, "", "HTML"),
            "Html"
        );
    }

    #[test]
    fn test_camel_strict_capitalizes_every_acronym() {
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::CamelStrict, "", "HTML"),
            "Html"
        );
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::CamelStrict, "User", "ID"),
            "UserId"
        );
    }

    #[test]
    fn test_literal_keeps_acronyms() {
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::Literal, "Parse", "HTML"),
            "ParseHTML"
        );
        assert_eq!(
            compose(CasingKind::Camel, AcronymKind::None, "parse", "HTML"),
            "parseHTML"
        );
    }

    #[test]
    fn test_acronym_style_ignored_outside_camel_and_pascal() {
        assert_eq!(
            compose(CasingKind::Hyphen, AcronymKind::CamelStrict, "parse", "HTML"),
            "parse-HTML"
        );
        assert_eq!(
            compose(CasingKind::None, AcronymKind::CamelStrict, "Parse", "HTML"),
            "Parse HTML"
        );
    }

    // ========== Casing Transforms ==========

    #[test]
    fn test_camel() {
        assert_eq!(compose(CasingKind::Camel, AcronymKind::None, "", "Foo"), "foo");
        assert_eq!(
            compose(CasingKind::Camel, AcronymKind::None, "foo", "Bar"),
            "fooBar"
        );
        assert_eq!(
            compose(CasingKind::Camel, AcronymKind::MsNamingGuidelines, "", "ID"),
            "id"
        );
    }

    #[test]
    fn test_pascal() {
        assert_eq!(compose(CasingKind::Pascal, AcronymKind::None, "", "user"), "User");
        assert_eq!(
            compose(CasingKind::Pascal, AcronymKind::None, "User", "name"),
            "UserName"
        );
    }

    #[test]
    fn test_lower_underscore() {
        assert_eq!(
            compose(CasingKind::LowerUnderscore, AcronymKind::None, "foo", "Bar"),
            "foo_bar"
        );
        assert_eq!(
            compose(CasingKind::LowerUnderscore, AcronymKind::None, "", "HTML"),
            "html"
        );
    }

    #[test]
    fn test_upper_underscore() {
        assert_eq!(
            compose(CasingKind::UpperUnderscore, AcronymKind::None, "MAX", "size"),
            "MAX_SIZE"
        );
    }

    #[test]
    fn test_hyphen() {
        assert_eq!(
            compose(CasingKind::Hyphen, AcronymKind::None, "foo", "bar"),
            "foo-bar"
        );
        assert_eq!(
            compose(CasingKind::Hyphen, AcronymKind::None, "foo", "Bar"),
            "foo-bar"
        );
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(
            compose(CasingKind::None, AcronymKind::None, "User", "name"),
            "User Name"
        );
    }

    #[test]
    fn test_first_token_has_no_leading_separator() {
        for casing in ALL_CASINGS {
            let composed = compose(casing, AcronymKind::None, "", "word");
            assert!(
                !composed.starts_with(['_', '-', ' ']),
                "{:?} produced {:?}",
                casing,
                composed
            );
            assert_eq!(composed.to_lowercase(), "word");
        }
    }

    // ========== Candidate Folding ==========

    #[test]
    fn test_compose_multi_word_candidate() {
        assert_eq!(
            compose_candidate(CasingKind::Camel, AcronymKind::None, "", "user name"),
            "userName"
        );
        assert_eq!(
            compose_candidate(
                CasingKind::LowerUnderscore,
                AcronymKind::None,
                "get",
                "user  name"
            ),
            "get_user_name"
        );
    }

    #[test]
    fn test_compose_blank_candidate_keeps_prefix() {
        assert_eq!(
            compose_candidate(CasingKind::Camel, AcronymKind::None, "user", " "),
            "user"
        );
    }

    #[test]
    fn test_prefix_captures_continuation_state() {
        let words = ["get", "HTML", "body text"];
        for casing in ALL_CASINGS {
            for style in [
                AcronymKind::MsNamingGuidelines,
                AcronymKind::CamelStrict,
                AcronymKind::Literal,
            ] {
                let all_at_once = compose_all(casing, style, "", words);
                let head = compose_all(casing, style, "", words[..1].iter().copied());
                let continued = compose_all(casing, style, &head, words[1..].iter().copied());
                assert_eq!(all_at_once, continued, "{:?} / {:?}", casing, style);
            }
        }
    }
}
