//! Mock translation service for testing
//!
//! This module provides a deterministic, network-free [`TranslationService`]
//! for exercising the decoder and the navigation engine without an access
//! token.
//!
//! # Example
//!
//! ```ignore
//! use codic_namer::naming::{MockMode, MockTranslationService, Query, TranslationService};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslationService::new(MockMode::Echo);
//!     let payload = mock.translate(&Query::new("user name", Default::default(), Default::default())).await.unwrap();
//!     assert!(String::from_utf8(payload).unwrap().contains("user"));
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::naming::casing::compose_all;
use crate::naming::error::{NamingError, NamingResult};
use crate::naming::query::Query;
use crate::naming::translator::TranslationService;

/// Mock response modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Every word of the query is its own single candidate
    Echo,

    /// Predefined raw payloads keyed by query text; unknown text falls back to `Echo`
    Payloads(HashMap<String, String>),

    /// Word-by-word candidate lists keyed by source word; unknown words echo
    Dictionary(HashMap<String, Vec<String>>),

    /// Simulate a transport failure
    Error { status: Option<u16>, message: String },
}

/// Mock service that simulates Codic responses
#[derive(Debug, Clone)]
pub struct MockTranslationService {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Number of `translate` calls made, shared across clones
    calls: Arc<AtomicUsize>,
}

impl MockTranslationService {
    /// Create a mock service with the given mode and no delay
    ///
    /// # Arguments
    ///
    /// * `mode` - How each query is answered
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mock = MockTranslationService::new(MockMode::Echo);
    /// ```
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a mock whose every call takes roughly `delay_ms`
    ///
    /// # Arguments
    ///
    /// * `mode` - How each query is answered
    /// * `delay_ms` - Simulated network delay in milliseconds
    ///
    /// # Example
    ///
    /// ```ignore
    /// let slow = MockTranslationService::with_delay(MockMode::Echo, 60);
    /// // A second submission made during those 60ms supersedes the first
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Build a mock answering each word from `entries`
    ///
    /// # Arguments
    ///
    /// * `entries` - `(source word, candidates)` pairs; the first candidate is
    ///   the word's translation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mock = MockTranslationService::dictionary(&[
    ///     ("user", &["user", "client"][..]),
    ///     ("name", &["name", "title"][..]),
    /// ]);
    /// ```
    pub fn dictionary(entries: &[(&str, &[&str])]) -> Self {
        let map = entries
            .iter()
            .map(|(word, candidates)| {
                (
                    word.to_string(),
                    candidates.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        Self::new(MockMode::Dictionary(map))
    }

    /// Number of `translate` calls made so far, counted across clones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn respond(&self, query: &Query) -> NamingResult<Vec<u8>> {
        match &self.mode {
            MockMode::Echo => Ok(synthesize(query, &HashMap::new())),
            MockMode::Payloads(map) => Ok(map
                .get(&query.text)
                .map(|payload| payload.clone().into_bytes())
                .unwrap_or_else(|| synthesize(query, &HashMap::new()))),
            MockMode::Dictionary(map) => Ok(synthesize(query, map)),
            MockMode::Error { status, message } => Err(NamingError::Transport {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Build a Codic-shaped payload for `query` from per-word candidates
fn synthesize(query: &Query, dictionary: &HashMap<String, Vec<String>>) -> Vec<u8> {
    let words: Vec<(String, Vec<String>)> = query
        .text
        .split_whitespace()
        .map(|word| {
            let candidates = dictionary
                .get(word)
                .filter(|candidates| !candidates.is_empty())
                .cloned()
                .unwrap_or_else(|| vec![word.to_string()]);
            (word.to_string(), candidates)
        })
        .collect();

    let translated = compose_all(
        query.casing,
        query.acronym_style,
        "",
        words.iter().map(|(_, candidates)| candidates[0].as_str()),
    );

    let words_json: Vec<_> = words
        .iter()
        .map(|(word, candidates)| {
            json!({
                "successful": true,
                "text": word,
                "translated_text": candidates[0],
                "candidates": candidates.iter().map(|c| json!({ "text": c })).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!([{
        "successful": true,
        "text": query.text,
        "translated_text": translated,
        "words": words_json,
    }])
    .to_string()
    .into_bytes()
}

#[async_trait]
impl TranslationService for MockTranslationService {
    async fn translate(&self, query: &Query) -> NamingResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.respond(query)
    }

    fn provider_name(&self) -> &str {
        "Mock Codic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::decoder::decode;
    use crate::naming::query::{AcronymKind, CasingKind};

    fn query(text: &str) -> Query {
        Query::new(text, CasingKind::Camel, AcronymKind::None)
    }

    #[tokio::test]
    async fn test_echo_payload_decodes() {
        let mock = MockTranslationService::new(MockMode::Echo);
        let payload = mock.translate(&query("user name")).await.unwrap();
        let (result, words) = decode(&payload).unwrap();

        assert_eq!(result.translated_text, "userName");
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].first_token(), "name");
    }

    #[tokio::test]
    async fn test_dictionary_candidates() {
        let mock = MockTranslationService::dictionary(&[("user", &["user", "client"][..])]);
        let payload = mock.translate(&query("user id")).await.unwrap();
        let (_, words) = decode(&payload).unwrap();

        assert_eq!(words[0].tokens().collect::<Vec<_>>(), vec!["user", "client"]);
        assert_eq!(words[1].tokens().collect::<Vec<_>>(), vec!["id"]);
    }

    #[tokio::test]
    async fn test_payload_mode_returns_canned_bytes() {
        let mut payloads = HashMap::new();
        payloads.insert("broken".to_string(), "{}".to_string());
        let mock = MockTranslationService::new(MockMode::Payloads(payloads));

        let payload = mock.translate(&query("broken")).await.unwrap();
        assert_eq!(payload, b"{}".to_vec());
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockTranslationService::new(MockMode::Error {
            status: Some(503),
            message: "unavailable".to_string(),
        });
        let err = mock.translate(&query("a")).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error 503: unavailable");
    }

    #[tokio::test]
    async fn test_call_count_is_shared_by_clones() {
        let mock = MockTranslationService::new(MockMode::Echo);
        let clone = mock.clone();
        clone.translate(&query("a")).await.unwrap();
        mock.translate(&query("b")).await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_delay() {
        let mock = MockTranslationService::with_delay(MockMode::Echo, 30);
        let start = std::time::Instant::now();
        mock.translate(&query("a")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
