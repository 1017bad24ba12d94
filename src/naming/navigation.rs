//! Drill-down navigation engine
//!
//! One engine drives one naming session:
//!
//! ```text
//! Idle --submit--> Querying --decoded--> Presenting(0) --select--> Presenting(1) ... --select--> Finalized
//!                      |                       |                                                  |
//!                      +--failed--> Idle       +--select(result)--> Finalized     Finalized --reset--> Idle
//! ```
//!
//! Submissions are debounced: each one waits for the quiet interval before the
//! service is called and is dropped if a newer submission arrived meanwhile.
//! A call that completes after being superseded is discarded, never merged.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::naming::data::{TranslationResult, WordCandidate, WordCandidates};
use crate::naming::decoder::decode;
use crate::naming::error::{NamingError, NamingResult};
use crate::naming::presenter::{
    ErrorItem, PresentationLayer, candidate_label, present, result_label,
};
use crate::naming::query::Query;
use crate::naming::translator::TranslationService;

/// Default quiet interval between the last keystroke and the service call
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// What the user picked in the current layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The whole-result item
    Result,
    /// A candidate of the active word, by its source index
    Candidate(usize),
}

/// A finished identifier together with the query that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalName {
    pub label: String,
    pub query: Query,
}

/// Outcome of one selection on a [`NavigationState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Depth advanced; present the next layer
    Advanced,
    Finalized(String),
}

/// Session state while candidates are being presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub query: Query,
    pub result: TranslationResult,
    pub words: WordCandidates,
    /// Number of words decided so far
    pub depth: usize,
    /// Identifier composed from the decided words
    pub decided_prefix: String,
}

impl NavigationState {
    /// Fresh state at depth 0 with nothing decided
    pub fn new(query: Query, result: TranslationResult, words: WordCandidates) -> Self {
        Self {
            query,
            result,
            words,
            depth: 0,
            decided_prefix: String::new(),
        }
    }

    /// The word currently being decided, if any
    pub fn active_word(&self) -> Option<&WordCandidate> {
        self.words.get(self.depth)
    }

    /// Every word has been decided
    pub fn is_complete(&self) -> bool {
        self.depth >= self.words.len()
    }

    /// Items to show for the current depth
    pub fn layer(&self) -> PresentationLayer {
        present(
            &self.query,
            &self.result,
            &self.words,
            self.depth,
            &self.decided_prefix,
        )
    }

    /// Apply a selection; on error the state is left untouched
    pub fn select(&mut self, selection: Selection) -> NamingResult<Step> {
        let index = match selection {
            Selection::Result => {
                return Ok(Step::Finalized(result_label(
                    &self.query,
                    &self.result,
                    &self.words,
                )));
            }
            Selection::Candidate(index) => index,
        };

        let word = self.active_word().ok_or(NamingError::InvalidSelection {
            index,
            available: 0,
        })?;
        let token = word.token(index).ok_or(NamingError::InvalidSelection {
            index,
            available: word.candidate_count(),
        })?;
        let composed = candidate_label(&self.query, &self.decided_prefix, token);

        self.depth += 1;
        self.decided_prefix = composed;
        if self.is_complete() {
            Ok(Step::Finalized(self.decided_prefix.clone()))
        } else {
            Ok(Step::Advanced)
        }
    }
}

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Querying,
    Presenting(NavigationState),
    Finalized(FinalName),
}

/// Result of [`NavigationEngine::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Layer 0 of the new session
    Presented(PresentationLayer),
    /// Transport or decode failure, already turned into a displayable item
    Failed(ErrorItem),
    /// Empty query; nothing happened
    Skipped,
    /// A newer submission replaced this one; nothing to display
    Superseded,
}

/// Result of [`NavigationEngine::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Presenting(PresentationLayer),
    Finalized(FinalName),
}

/// Drives one naming session against a [`TranslationService`]
pub struct NavigationEngine {
    service: Arc<dyn TranslationService>,
    quiet_interval: Duration,
    phase: Mutex<Phase>,
    /// Ticket of the most recent submission
    submissions: AtomicU64,
}

impl NavigationEngine {
    /// Create an idle engine over `service`
    ///
    /// # Arguments
    ///
    /// * `service` - Where queries are translated; shared so the CLI and
    ///   tests can keep a handle on it
    ///
    /// # Example
    ///
    /// ```ignore
    /// let engine = NavigationEngine::new(Arc::new(CodicProvider::from_env()?))
    ///     .with_quiet_interval(Duration::from_millis(500));
    /// ```
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self {
            service,
            quiet_interval: DEFAULT_QUIET_INTERVAL,
            phase: Mutex::new(Phase::Idle),
            submissions: AtomicU64::new(0),
        }
    }

    /// Minimum quiet time before a submission reaches the service
    pub fn with_quiet_interval(mut self, quiet_interval: Duration) -> Self {
        self.quiet_interval = quiet_interval;
        self
    }

    /// Current quiet interval
    pub fn quiet_interval(&self) -> Duration {
        self.quiet_interval
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current phase
    pub fn phase(&self) -> Phase {
        self.lock().clone()
    }

    /// Snapshot of the navigation state while presenting
    pub fn state(&self) -> Option<NavigationState> {
        match &*self.lock() {
            Phase::Presenting(state) => Some(state.clone()),
            _ => None,
        }
    }

    fn ensure_current(&self, ticket: u64) -> NamingResult<()> {
        if self.submissions.load(Ordering::SeqCst) == ticket {
            Ok(())
        } else {
            Err(NamingError::Superseded)
        }
    }

    /// Replace the phase, unless `ticket` has been superseded
    fn commit(&self, ticket: u64, next: Phase) -> NamingResult<()> {
        let mut phase = self.lock();
        self.ensure_current(ticket)?;
        *phase = next;
        Ok(())
    }

    async fn run(&self, ticket: u64, query: &Query) -> NamingResult<PresentationLayer> {
        self.commit(ticket, Phase::Querying)?;

        if !self.quiet_interval.is_zero() {
            tokio::time::sleep(self.quiet_interval).await;
        }
        self.ensure_current(ticket)?;

        info!(
            "Translating '{}' {} via {}",
            query.text,
            query.settings_label(),
            self.service.provider_name()
        );
        let payload = self.service.translate(query).await;
        self.ensure_current(ticket)?;

        let (result, words) = decode(&payload?)?;
        let state = NavigationState::new(query.clone(), result, words);
        let layer = state.layer();
        self.commit(ticket, Phase::Presenting(state))?;
        Ok(layer)
    }

    /// Start a new session for `query`, discarding the current one
    ///
    /// Empty queries are ignored. Transport and decode failures return the
    /// engine to `Idle` and come back as a single [`ErrorItem`].
    pub async fn submit(&self, query: Query) -> SubmitOutcome {
        if query.is_empty() {
            debug!("{}; submission ignored", NamingError::EmptyQuery);
            return SubmitOutcome::Skipped;
        }

        let ticket = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
        match self.run(ticket, &query).await {
            Ok(layer) => {
                debug!(
                    "Presenting {} candidate(s) for '{}'",
                    layer.word_items.len(),
                    query.text
                );
                SubmitOutcome::Presented(layer)
            }
            Err(NamingError::Superseded) => {
                debug!("Dropping superseded result for '{}'", query.text);
                SubmitOutcome::Superseded
            }
            Err(err) => {
                if self.commit(ticket, Phase::Idle).is_err() {
                    return SubmitOutcome::Superseded;
                }
                warn!("Translation of '{}' failed: {}", query.text, err);
                SubmitOutcome::Failed(ErrorItem {
                    label: query.text,
                    description: err.to_string(),
                })
            }
        }
    }

    /// Apply the user's choice in the current layer
    ///
    /// Invalid selections leave the phase unchanged.
    pub fn select(&self, selection: Selection) -> NamingResult<SelectOutcome> {
        let mut phase = self.lock();
        let Phase::Presenting(state) = &mut *phase else {
            return Err(NamingError::NotPresenting);
        };

        match state.select(selection)? {
            Step::Advanced => Ok(SelectOutcome::Presenting(state.layer())),
            Step::Finalized(label) => {
                let name = FinalName {
                    label,
                    query: state.query.clone(),
                };
                info!("Finalized '{}' → '{}'", name.query.text, name.label);
                *phase = Phase::Finalized(name.clone());
                Ok(SelectOutcome::Finalized(name))
            }
        }
    }

    /// Abandon the session and return to `Idle`
    ///
    /// Any call still in flight is superseded.
    pub fn reset(&self) {
        let mut phase = self.lock();
        self.submissions.fetch_add(1, Ordering::SeqCst);
        *phase = Phase::Idle;
    }
}
