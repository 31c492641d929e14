//! Error types for the WiseAI recommendation core.

use thiserror::Error;

/// Result type alias using WiseAI's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for WiseAI operations.
///
/// Only [`Error::NoQuotesAvailable`] can surface from a recommendation
/// request. Every other variant is raised while loading artifacts or
/// configuration, before any request is served.
#[derive(Error, Debug)]
pub enum Error {
    /// The quote store is empty, so no recommendation can be produced
    #[error("No quotes available")]
    NoQuotesAvailable,

    /// A classifier or quote-store artifact is structurally invalid
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl Error {
    /// Whether this error is the per-request fatal condition callers must
    /// special-case.
    pub fn is_no_quotes(&self) -> bool {
        matches!(self, Error::NoQuotesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_quotes() {
        assert_eq!(Error::NoQuotesAvailable.to_string(), "No quotes available");
    }

    #[test]
    fn test_error_display_artifact() {
        let err = Error::Artifact("missing field `quotes`".to_string());
        assert_eq!(err.to_string(), "Artifact error: missing field `quotes`");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("WISEAI_STORE_PATH is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: WISEAI_STORE_PATH is not set"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "quotes.json");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("quotes.json"));
    }

    #[test]
    fn test_is_no_quotes() {
        assert!(Error::NoQuotesAvailable.is_no_quotes());
        assert!(!Error::Config("x".to_string()).is_no_quotes());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
