//! Error types for recview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all startup and terminal failures
//!   - [`SourceError`] - Data file could not be opened or decoded
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file could not be set up
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`FetchError`] - A single page read failed. Never wrapped in `AppError`.
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the last good page stays on screen and the
//! error is shown in the status bar until the next successful fetch. There is no
//! retry; moving to another page issues a fresh, single attempt.
//!
//! A status change aimed at a record that is no longer on the current page is
//! not an error at all. It is dropped without surfacing anything, because the
//! page was replaced between the key press and the dispatch.
//!
//! Startup errors (config, logging, data file) are fatal and reported before the
//! terminal enters raw mode.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to open or decode the backing data.
    #[error("Failed to load records: {0}")]
    Source(#[from] SourceError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize file logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the browser cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised while opening a data provider.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use recview::model::error::SourceError;
    ///
    /// let err = SourceError::FileNotFound { path: PathBuf::from("/tmp/missing.json") };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The data file exists but is not a JSON array of records.
    #[error("Invalid record data in {path}: {message}")]
    InvalidData {
        /// File that failed to parse.
        path: PathBuf,
        /// Extracted from `serde_json::Error::to_string()`.
        message: String,
    },

    /// No data file was given on the command line, in the config file or in the environment.
    #[error("No data source: provide a records file path or set RECVIEW_DATA")]
    NoInput,

    /// Any other read failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single page read.
///
/// `Clone` so outcomes can travel through actions and be kept as the last
/// displayed diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider could not be reached or failed while serving the page.
    #[error("Page {page} unavailable: {message}")]
    Unavailable {
        /// 1-based page number.
        page: usize,
        /// Provider failure text.
        message: String,
    },

    /// The response decoded but violates page invariants (size, unique ids).
    #[error("Page {page} is invalid: {reason}")]
    InvalidPage {
        /// 1-based page number.
        page: usize,
        /// Violated invariant.
        reason: String,
    },

    /// The background worker for the request could not be started.
    #[error("Could not start fetch for page {page}: {message}")]
    Spawn {
        /// 1-based page number.
        page: usize,
        /// Thread spawn failure text.
        message: String,
    },
}

impl FetchError {
    /// 1-based page number the failed request was for.
    pub fn page(&self) -> usize {
        match self {
            FetchError::Unavailable { page, .. }
            | FetchError::InvalidPage { page, .. }
            | FetchError::Spawn { page, .. } => *page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_reports_one_based_page() {
        let err = FetchError::Unavailable {
            page: 3,
            message: "connection reset".to_string(),
        };
        assert_eq!(err.page(), 3);
        assert_eq!(err.to_string(), "Page 3 unavailable: connection reset");
    }

    #[test]
    fn invalid_page_message_includes_reason() {
        let err = FetchError::InvalidPage {
            page: 1,
            reason: "duplicate record id 4".to_string(),
        };
        assert!(err.to_string().contains("duplicate record id 4"));
    }

    #[test]
    fn source_error_converts_into_app_error() {
        fn open() -> Result<(), AppError> {
            let opened: Result<(), SourceError> = Err(SourceError::NoInput);
            opened?;
            Ok(())
        }

        let err = open().unwrap_err();
        assert!(matches!(err, AppError::Source(SourceError::NoInput)));
        assert!(err.to_string().contains("RECVIEW_DATA"));
    }

    #[test]
    fn io_error_converts_into_app_error() {
        fn draw() -> Result<(), AppError> {
            let drawn: Result<(), std::io::Error> = Err(std::io::Error::other("broken pipe"));
            drawn?;
            Ok(())
        }

        let err = draw().unwrap_err();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
