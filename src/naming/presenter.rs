//! Candidate presenter
//!
//! Builds the selectable items for one navigation layer: the whole-result
//! item plus every candidate of the word currently being decided, each folded
//! onto the decided prefix.

use crate::naming::casing::{compose_all, compose_candidate};
use crate::naming::data::{TranslationResult, WordCandidate};
use crate::naming::query::Query;

/// Label shown for a candidate that composes to nothing
pub const BLANK_LABEL: &str = " ";

/// The whole-phrase translation, selectable at any depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub label: String,
    pub description: String,
    /// Offered as the immediately-selectable default (depth 0 only)
    pub is_final: bool,
}

/// One candidate of the word being decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordItem {
    /// The identifier as it reads once this candidate is chosen
    pub label: String,
    pub source_candidate_index: usize,
    /// Selecting this item finalizes the identifier
    pub is_terminal: bool,
}

/// Everything the display sink renders for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationLayer {
    pub result_item: ResultItem,
    pub word_items: Vec<WordItem>,
}

/// An error turned into a single displayable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorItem {
    /// The text the user typed
    pub label: String,
    pub description: String,
}

/// Whole-result label: the service's translation, or the first candidates composed
pub fn result_label(query: &Query, result: &TranslationResult, words: &[WordCandidate]) -> String {
    if !result.translated_text.trim().is_empty() {
        return result.translated_text.clone();
    }
    compose_all(
        query.casing,
        query.acronym_style,
        "",
        words.iter().map(WordCandidate::first_token),
    )
}

/// Label a candidate token would produce on top of `decided`
///
/// Returns the composed prefix itself; [`display_label`] turns an empty one
/// into something visible.
pub fn candidate_label(query: &Query, decided: &str, token: &str) -> String {
    compose_candidate(query.casing, query.acronym_style, decided, token)
}

fn display_label(composed: String) -> String {
    if composed.is_empty() {
        BLANK_LABEL.to_string()
    } else {
        composed
    }
}

/// Build the presentation layer for `depth`
pub fn present(
    query: &Query,
    result: &TranslationResult,
    words: &[WordCandidate],
    depth: usize,
    decided: &str,
) -> PresentationLayer {
    let result_item = ResultItem {
        label: result_label(query, result, words),
        description: query.describe(),
        is_final: depth == 0,
    };

    let word_items = match words.get(depth) {
        Some(word) => {
            let is_terminal = depth + 1 == words.len();
            word.tokens()
                .enumerate()
                .map(|(index, token)| WordItem {
                    label: display_label(candidate_label(query, decided, token)),
                    source_candidate_index: index,
                    is_terminal,
                })
                .collect()
        }
        None => Vec::new(),
    };

    PresentationLayer {
        result_item,
        word_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::data::Candidate;
    use crate::naming::query::{AcronymKind, CasingKind};

    fn word(source: &str, candidates: &[&str]) -> WordCandidate {
        WordCandidate {
            successful: true,
            source_text: source.to_string(),
            translated_text: candidates[0].to_string(),
            candidates: candidates
                .iter()
                .map(|c| Candidate::Text(c.to_string()))
                .collect(),
        }
    }

    fn fixture() -> (Query, TranslationResult, Vec<WordCandidate>) {
        let query = Query::new("user name", CasingKind::Pascal, AcronymKind::None);
        let result = TranslationResult {
            successful: true,
            source_text: "user name".to_string(),
            translated_text: "UserName".to_string(),
        };
        let words = vec![
            word("user", &["User", "Client"]),
            word("name", &["Name", "Title"]),
        ];
        (query, result, words)
    }

    #[test]
    fn test_layer_zero() {
        let (query, result, words) = fixture();
        let layer = present(&query, &result, &words, 0, "");

        assert_eq!(layer.result_item.label, "UserName");
        assert!(layer.result_item.is_final);
        assert_eq!(
            layer.result_item.description,
            "Codic Translate (pascal, default): user name"
        );

        let labels: Vec<&str> = layer.word_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["User", "Client"]);
        assert!(layer.word_items.iter().all(|i| !i.is_terminal));
        assert_eq!(layer.word_items[1].source_candidate_index, 1);
    }

    #[test]
    fn test_last_word_is_terminal() {
        let (query, result, words) = fixture();
        let layer = present(&query, &result, &words, 1, "Client");

        assert!(!layer.result_item.is_final);
        let labels: Vec<&str> = layer.word_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["ClientName", "ClientTitle"]);
        assert!(layer.word_items.iter().all(|i| i.is_terminal));
    }

    #[test]
    fn test_past_last_word_has_no_items() {
        let (query, result, words) = fixture();
        let layer = present(&query, &result, &words, 2, "ClientTitle");
        assert!(layer.word_items.is_empty());
    }

    #[test]
    fn test_result_label_falls_back_to_first_candidates() {
        let (_, mut result, words) = fixture();
        result.translated_text.clear();
        let query = Query::new("user name", CasingKind::LowerUnderscore, AcronymKind::None);
        assert_eq!(result_label(&query, &result, &words), "user_name");
    }

    #[test]
    fn test_multi_word_candidate_is_folded() {
        let (query, result, _) = fixture();
        let words = vec![word("login", &["sign in", "login"])];
        let layer = present(&query, &result, &words, 0, "");
        assert_eq!(layer.word_items[0].label, "SignIn");
        assert!(layer.word_items[0].is_terminal);
    }

    #[test]
    fn test_no_value_candidate_displays_blank() {
        let (query, result, _) = fixture();
        let words = vec![WordCandidate {
            successful: true,
            source_text: "the".to_string(),
            translated_text: "the".to_string(),
            candidates: vec![Candidate::Text("the".into()), Candidate::NoValue],
        }];
        let layer = present(&query, &result, &words, 0, "");
        assert_eq!(layer.word_items[1].label, BLANK_LABEL);

        let layer = present(&query, &result, &words, 0, "Get");
        assert_eq!(layer.word_items[1].label, "Get");
    }
}
