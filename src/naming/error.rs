/// Error types for the naming engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// Payload does not have the shape of a Codic translation response
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// Network or service failure reported by the translation collaborator
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The query text was empty after trimming
    #[error("Empty query")]
    EmptyQuery,
    /// A completed call whose submission was replaced by a newer one
    #[error("Result superseded by a newer submission")]
    Superseded,
    /// Invalid configuration or provider setup
    #[error("Configuration error: {0}")]
    Config(String),
    /// Selection index outside the presented candidates
    #[error("Invalid selection {index}: {available} candidate(s) presented")]
    InvalidSelection { index: usize, available: usize },
    /// Selection attempted while nothing is being presented
    #[error("No candidates are being presented")]
    NotPresenting,
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP Error {}: {}", code, message),
        None => format!("Error: {}", message),
    }
}

impl From<reqwest::Error> for NamingError {
    fn from(err: reqwest::Error) -> Self {
        NamingError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NamingError {
    fn from(err: toml::de::Error) -> Self {
        NamingError::Config(err.to_string())
    }
}

/// Result type for naming operations
pub type NamingResult<T> = Result<T, NamingError>;
