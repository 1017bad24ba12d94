//! Codic translation engine provider
//!
//! This module talks to the Codic engine API to turn a phrase into identifier
//! candidates.
//!
//! # Authentication
//!
//! Requests carry a bearer access token. [`CodicProvider::from_env`] loads it
//! from the `CODIC_ACCESS_TOKEN` environment variable. Obtain a token from:
//! https://codic.jp/my/api_status
//!
//! # Example
//!
//! ```ignore
//! use codic_namer::naming::{CasingKind, AcronymKind, CodicProvider, Query, TranslationService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CodicProvider::from_env()?;
//!     let query = Query::new("user name", CasingKind::Camel, AcronymKind::None);
//!     let payload = provider.translate(&query).await?;
//!     println!("{}", String::from_utf8_lossy(&payload));
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::naming::error::{NamingError, NamingResult};
use crate::naming::query::Query;
use crate::naming::translator::TranslationService;

/// Environment variable holding the access token
pub const ACCESS_TOKEN_VAR: &str = "CODIC_ACCESS_TOKEN";

/// Codic engine page that shows the same query in a browser
pub const BROWSE_URL: &str = "https://codic.jp/engine";

/// Codic engine API provider
#[derive(Clone)]
pub struct CodicProvider {
    /// Bearer token for authentication
    access_token: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL of the Codic API
    base_url: String,
}

impl CodicProvider {
    const DEFAULT_BASE_URL: &'static str = "https://api.codic.jp";
    const TRANSLATE_PATH: &'static str = "/v1/engine/translate.json";

    /// Create a provider with an explicit access token
    ///
    /// # Arguments
    ///
    /// * `access_token` - Codic API access token, sent as a bearer token
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(NamingError::Config)` - If the token is blank or the HTTP client
    ///   cannot be built
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = CodicProvider::new("your-access-token".to_string())?;
    /// ```
    pub fn new(access_token: String) -> NamingResult<Self> {
        if access_token.trim().is_empty() {
            return Err(NamingError::Config(
                "Access token cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| NamingError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            access_token: access_token.trim().to_string(),
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the `CODIC_ACCESS_TOKEN` environment variable
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(NamingError::Config)` - If the variable is unset or blank
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = CodicProvider::from_env()?;
    /// ```
    pub fn from_env() -> NamingResult<Self> {
        let access_token = std::env::var(ACCESS_TOKEN_VAR).map_err(|_| {
            NamingError::Config(format!("{} environment variable not set", ACCESS_TOKEN_VAR))
        })?;

        Self::new(access_token)
    }

    /// Point the provider at another server (used against mock servers)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, Self::TRANSLATE_PATH)
    }
}

/// Parameters shared by the API request and the browse URL
///
/// Only settings the service understands are included: no project id when
/// blank, no casing or acronym style when unset.
pub fn query_params(query: &Query) -> Vec<(&'static str, String)> {
    let mut params = vec![("text", query.text.clone())];
    if let Some(project_id) = &query.project_id {
        params.push(("project_id", project_id.clone()));
    }
    if let Some(casing) = query.casing.api_name() {
        params.push(("casing", casing.to_string()));
    }
    if let Some(style) = query.acronym_style.api_name() {
        params.push(("acronym_style", style.to_string()));
    }
    params
}

/// JSON body of a translate request
pub fn request_body(query: &Query) -> Value {
    let body: Map<String, Value> = query_params(query)
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect();
    Value::Object(body)
}

/// URL of the Codic engine page for `query`
pub fn browse_url(query: &Query) -> NamingResult<String> {
    reqwest::Url::parse_with_params(BROWSE_URL, query_params(query))
        .map(String::from)
        .map_err(|e| NamingError::Config(format!("Invalid browse URL: {}", e)))
}

impl std::fmt::Debug for CodicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodicProvider")
            .field("access_token", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TranslationService for CodicProvider {
    async fn translate(&self, query: &Query) -> NamingResult<Vec<u8>> {
        let body = request_body(query);
        debug!("POST {} {}", self.endpoint(), body);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Codic API returned {}: {}", status, error_text);
            return Err(NamingError::Transport {
                status: Some(status.as_u16()),
                message: error_text,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn provider_name(&self) -> &str {
        "Codic"
    }
}
