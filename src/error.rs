//! Error handler for enlist.

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("cannot install metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    #[error("internal server error, {details}")]
    Internal { details: String },
}

impl ServerError {
    /// Build a [`ServerError::Internal`] from anything printable.
    pub fn internal(details: impl ToString) -> Self {
        Self::Internal {
            details: details.to_string(),
        }
    }
}
