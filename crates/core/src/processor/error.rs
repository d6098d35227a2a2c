//! Error type for batch processors.

use thiserror::Error;

/// Error returned by a batch processor or by registry lookup.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Processing failed with an HTTP-typed error; the status code is
    /// preserved so the boundary layer can return the original error kind.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Generic processing failure.
    #[error("{0}")]
    Failed(String),

    /// No processor registered under the requested name.
    #[error("unknown processor backend: {0}")]
    UnknownProcessor(String),
}

impl ProcessorError {
    /// The HTTP status carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProcessorError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProcessorError::Failed("model blew up".to_string());
        assert_eq!(err.to_string(), "model blew up");

        let err = ProcessorError::Http {
            status: 422,
            message: "unprocessable input".to_string(),
        };
        assert_eq!(err.to_string(), "unprocessable input");
        assert_eq!(err.status_code(), Some(422));

        let err = ProcessorError::UnknownProcessor("nope".to_string());
        assert_eq!(err.to_string(), "unknown processor backend: nope");
        assert_eq!(err.status_code(), None);
    }
}
