//! Identifier Naming Module
//!
//! This module turns a free-text phrase into a programming identifier. The
//! phrase is sent to the Codic translation engine, and the user then drills
//! down word by word through the alternative translations while the chosen
//! words are composed under a naming convention.
//!
//! # Overview
//!
//! The module consists of several components working together:
//!
//! 1. **Casing Composer** - Folds candidate tokens into a camel/pascal/underscore/hyphen identifier
//! 2. **Response Decoder** - Reads a raw Codic payload into the whole result and per-word candidates
//! 3. **Candidate Presenter** - Builds the selectable items of one drill-down layer
//! 4. **Navigation Engine** - Debounced, last-submission-wins state machine over the layers
//! 5. **Service Trait & Providers** - Codic HTTP provider and a mock for tests
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use codic_namer::naming::{
//!     AcronymKind, CasingKind, CodicProvider, NavigationEngine, Query, Selection,
//!     SelectOutcome, SubmitOutcome,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = NavigationEngine::new(Arc::new(CodicProvider::from_env()?));
//!     let query = Query::new("ユーザー名", CasingKind::Camel, AcronymKind::None);
//!
//!     if let SubmitOutcome::Presented(layer) = engine.submit(query).await {
//!         println!("default: {}", layer.result_item.label);
//!         if let SelectOutcome::Finalized(name) = engine.select(Selection::Result)? {
//!             println!("{}", name.label);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod casing;
pub mod codic;
pub mod config;
pub mod data;
pub mod decoder;
pub mod error;
pub mod mock;
pub mod navigation;
pub mod presenter;
pub mod query;
pub mod translator;


pub use actions::{ResultAction, SideEffect};
pub use casing::{compose, compose_all, compose_candidate, is_acronym};
pub use codic::{ACCESS_TOKEN_VAR, CodicProvider, browse_url, request_body};
pub use config::{Section, Settings};
pub use data::{Candidate, TranslationResult, WordCandidate, WordCandidates};
pub use decoder::decode;
pub use error::{NamingError, NamingResult};
pub use mock::{MockMode, MockTranslationService};
pub use navigation::{
    DEFAULT_QUIET_INTERVAL, FinalName, NavigationEngine, NavigationState, Phase, SelectOutcome,
    Selection, Step, SubmitOutcome,
};
pub use presenter::{ErrorItem, PresentationLayer, ResultItem, WordItem, present};
pub use query::{AcronymKind, CasingKind, Query};
pub use translator::TranslationService;
