//! Response decoder
//!
//! Turns the raw bytes returned by the translation service into a
//! [`TranslationResult`] and the ordered per-word candidates.
//!
//! The Codic engine may elide array elements it has no value for, producing
//! text such as `[,{"text":"a"}]` or `[{"text":"a"},,{"text":"b"}]`. Those
//! holes are read as explicit `null` elements so that candidate positions stay
//! aligned; commas inside string literals are never touched.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::naming::data::{Candidate, TranslationResult, WordCandidate, WordCandidates};
use crate::naming::error::{NamingError, NamingResult};

/// Present-but-nullable field: `null` is accepted, a missing key is not
fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[derive(Debug, Deserialize)]
struct RawResult {
    successful: bool,
    text: String,
    #[serde(deserialize_with = "nullable")]
    translated_text: Option<String>,
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    successful: bool,
    text: String,
    #[serde(deserialize_with = "nullable")]
    translated_text: Option<String>,
    candidates: Vec<Option<RawCandidate>>,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    #[serde(deserialize_with = "nullable")]
    text: Option<String>,
}

/// Insert `null` for every elided array element outside string literals
///
/// A single trailing comma ends the array, so `[2,,]` holds two elements and
/// becomes `[2,null]`.
fn fill_elisions(raw: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(raw.len() + 16);
    let mut containers: Vec<char> = Vec::new();
    let mut previous: Option<char> = None;
    let mut in_string = false;
    let mut escaped = false;
    let mut changed = false;

    for ch in raw.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' | '{' => containers.push(ch),
            ']' if containers.last() == Some(&'[') && previous == Some(',') => {
                // A trailing comma closes the last hole without opening another
                if let Some(comma) = out.rfind(',') {
                    out.remove(comma);
                    changed = true;
                }
                containers.pop();
            }
            ']' | '}' => {
                containers.pop();
            }
            ',' if containers.last() == Some(&'[')
                && matches!(previous, Some('[') | Some(',')) =>
            {
                out.push_str("null");
                changed = true;
            }
            _ => {}
        }

        out.push(ch);
        if !ch.is_whitespace() {
            previous = Some(ch);
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}

fn malformed(message: impl std::fmt::Display) -> NamingError {
    NamingError::MalformedResponse(message.to_string())
}

fn decode_candidate(candidate: Option<RawCandidate>) -> Candidate {
    match candidate.and_then(|c| c.text) {
        Some(text) => Candidate::Text(text),
        None => Candidate::NoValue,
    }
}

/// Build a word, or `None` when the service translated it to nothing
fn decode_word(word: RawWord) -> Option<WordCandidate> {
    if !word.successful {
        return Some(WordCandidate::untranslated(&word.text));
    }

    let translated_text = word.translated_text.unwrap_or_default();
    let mut candidates: Vec<Candidate> =
        word.candidates.into_iter().map(decode_candidate).collect();

    let meaningless = translated_text.is_empty()
        && candidates.first().is_none_or(Candidate::is_no_value);
    if meaningless {
        return None;
    }
    if candidates.is_empty() {
        candidates.push(Candidate::Text(translated_text.clone()));
    }

    Some(WordCandidate {
        successful: true,
        source_text: word.text,
        translated_text,
        candidates,
    })
}

/// Decode a raw service payload
///
/// # Returns
///
/// * `Ok((TranslationResult, WordCandidates))` - whole-phrase result and the
///   kept words in source order
/// * `Err(NamingError::MalformedResponse)` - payload is not UTF-8 JSON, is not
///   a non-empty array, or lacks a required field
pub fn decode(payload: &[u8]) -> NamingResult<(TranslationResult, WordCandidates)> {
    let text = std::str::from_utf8(payload).map_err(malformed)?;
    let text = fill_elisions(text);

    let envelope: serde_json::Value = serde_json::from_str(&text).map_err(malformed)?;
    let first = envelope
        .as_array()
        .ok_or_else(|| malformed("expected a top-level array"))?
        .first()
        .cloned()
        .ok_or_else(|| malformed("top-level array is empty"))?;
    let raw: RawResult = serde_json::from_value(first).map_err(malformed)?;

    let result = TranslationResult {
        successful: raw.successful,
        source_text: raw.text,
        translated_text: raw.translated_text.unwrap_or_default(),
    };
    let total = raw.words.len();
    let words: WordCandidates = raw.words.into_iter().filter_map(decode_word).collect();

    debug!(
        "Decoded '{}' → '{}' ({} of {} words kept)",
        result.source_text,
        result.translated_text,
        words.len(),
        total
    );

    Ok((result, words))
}
