//! Error types for the APOD feed pipeline

use thiserror::Error;

/// Main error type for feed operations.
///
/// All variants are collapsed into one user-visible failure placeholder
/// at the UI boundary; the distinction exists for logging.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network-level failure (connect, TLS, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status
    #[error("Feed returned status {0}")]
    Status(u16),

    /// Response body was not a JSON array of feed entries
    #[error("Malformed feed body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using FeedError
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::Status(404);
        assert_eq!(format!("{}", err), "Feed returned status 404");
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let feed_err: FeedError = parse_err.into();
        assert!(matches!(feed_err, FeedError::Parse(_)));
    }
}
