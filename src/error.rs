//! Error types for the learn-scraper crate.
//!
//! All errors use stable string messages suitable for display to users.
//! Per-article failures are never represented here — they are tagged
//! outcomes on the extractor, not errors. These variants cover the
//! failures that can abort a whole run.

/// Errors that can occur during a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// An HTTP request failed or the client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search API response did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Writing the output file or creating the output folder failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Convenience type alias for learn-scraper results.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = ScrapeError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = ScrapeError::Parse("missing field `url`".into());
        assert_eq!(err.to_string(), "parse error: missing field `url`");
    }

    #[test]
    fn display_config() {
        let err = ScrapeError::Config("max_workers must be between 1 and 30".into());
        assert_eq!(
            err.to_string(),
            "config error: max_workers must be between 1 and 30"
        );
    }

    #[test]
    fn display_io() {
        let err = ScrapeError::Io("permission denied".into());
        assert_eq!(err.to_string(), "I/O error: permission denied");
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ScrapeError = io.into();
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScrapeError>();
    }
}
