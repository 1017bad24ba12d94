//! Translation service trait
//!
//! The engine never builds transport requests itself: it hands a [`Query`] to
//! a `TranslationService` and decodes whatever bytes come back. This keeps the
//! engine testable with [`MockTranslationService`](crate::naming::MockTranslationService)
//! and lets the HTTP provider own credentials and timeouts.
//!
//! # Example
//!
//! ```ignore
//! use codic_namer::naming::{CodicProvider, Query, TranslationService, decode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CodicProvider::from_env()?;
//!     let payload = provider.translate(&Query::new("user name", Default::default(), Default::default())).await?;
//!     let (result, words) = decode(&payload)?;
//!     println!("{} ({} words)", result.translated_text, words.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::naming::error::NamingResult;
use crate::naming::query::Query;

/// Source of raw translation payloads
///
/// Implementations return the service response body untouched. Failures are
/// reported as [`NamingError::Transport`](crate::naming::NamingError::Transport).
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate `query.text` with the query's project, casing and acronym style
    async fn translate(&self, query: &Query) -> NamingResult<Vec<u8>>;

    /// Name used in logs to identify the provider
    fn provider_name(&self) -> &str;
}
