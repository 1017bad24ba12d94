//! Core data structures decoded from a translation response

/// The whole-phrase translation, independent of per-word candidates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationResult {
    pub successful: bool,
    /// The phrase as sent to the service
    pub source_text: String,
    /// The phrase translated and cased by the service (may be empty)
    pub translated_text: String,
}

/// One alternative the service offers for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Text(String),
    /// The service's placeholder for "no translation"
    NoValue,
}

impl Candidate {
    /// The service had no text for this position
    pub fn is_no_value(&self) -> bool {
        matches!(self, Candidate::NoValue)
    }
}

/// Every candidate the service offers for a single source word
///
/// # Example
///
/// For the word `"name"` in `"user name"`:
///
/// ```ignore
/// WordCandidate {
///     successful: true,
///     source_text: "name",
///     translated_text: "name",
///     candidates: [Text("name"), Text("title"), NoValue],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    pub successful: bool,
    pub source_text: String,
    pub translated_text: String,
    /// Never empty; service order is kept
    pub candidates: Vec<Candidate>,
}

impl WordCandidate {
    /// A word the service failed to translate falls back to its source text
    pub fn untranslated(source_text: &str) -> Self {
        Self {
            successful: false,
            source_text: source_text.to_string(),
            translated_text: source_text.to_string(),
            candidates: vec![Candidate::Text(source_text.to_string())],
        }
    }

    /// The text a candidate contributes to the identifier
    ///
    /// A "no value" candidate becomes a single space on successful words and
    /// the source word otherwise.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(|candidate| match candidate {
            Candidate::Text(text) => text.as_str(),
            Candidate::NoValue if self.successful => " ",
            Candidate::NoValue => self.source_text.as_str(),
        })
    }

    /// Tokens of every candidate, in service order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        (0..self.candidates.len()).filter_map(move |index| self.token(index))
    }

    /// First candidate, used for the default whole-result label
    pub fn first_token(&self) -> &str {
        self.token(0).unwrap_or(self.source_text.as_str())
    }

    /// Number of candidates, "no value" positions included
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Ordered per-word candidates; order is the composition order
pub type WordCandidates = Vec<WordCandidate>;
