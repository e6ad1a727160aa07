//! Error types for Folio

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages and suggestions
///
/// Profile queries never fail; these cover the surfaces around them.
#[derive(Error, Debug)]
pub enum Error {
    // View errors (E001-E099)
    #[error("Unknown view '{0}'. Valid views: profile, projects, skills, search.")]
    UnknownView(String),

    // Config errors (E200-E299)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Api errors (E300-E399)
    #[error("Api unavailable: {0}")]
    ApiUnavailable(String),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownView(_) => "E001",
            Self::ConfigError(_) => "E200",
            Self::ApiUnavailable(_) => "E300",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownView(_) => Some("folio --help".to_string()),
            Self::ConfigError(_) => Some("folio config list".to_string()),
            Self::ApiUnavailable(_) => Some("folio health".to_string()),
        }
    }
}
