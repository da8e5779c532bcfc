//! Error types for document reconstruction.
//!
//! Reconstruction is a pure computation, so the only failures are callers
//! handing over input that breaks the item contract or a bad configuration.

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A text item violates the input contract
    #[error("Invalid text item {index} on page {page}: {reason}")]
    InvalidInput {
        /// Zero-based page index
        page: usize,
        /// Zero-based item index within the page
        index: usize,
        /// What is wrong with the item
        reason: String,
    },

    /// The input is not shaped like a list of pages
    #[error("Invalid page structure: {0}")]
    InvalidStructure(String),

    /// Reconstruction settings are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON syntax error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidInput`] for item `index` on page `page`.
    pub fn invalid_input(page: usize, index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            page,
            index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = Error::invalid_input(2, 7, "y is not finite");
        let msg = format!("{}", err);
        assert!(msg.contains("item 7"));
        assert!(msg.contains("page 2"));
        assert!(msg.contains("y is not finite"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = Error::InvalidConfig("base font size must be positive".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
