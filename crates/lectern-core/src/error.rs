//! Error types and handling for lectern-core operations.
//!
//! The outline, collapse and query components are total: bad inputs degrade to
//! empty results or `None` rather than errors. Only the edges that touch the
//! outside world (reading metadata, reading or writing configuration) are
//! fallible, and they report through the [`Error`] type defined here.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading metadata or configuration files
//! - **Parse Errors**: metadata documents that are not valid JSON for a deck
//! - **Serialization Errors**: JSON/TOML encoding and decoding failures
//! - **Configuration Errors**: invalid or unreachable configuration
//! - **Not Found**: missing files or unknown slides/sections
//!
//! ```rust
//! use lectern_core::{Deck, Error};
//!
//! match Deck::from_json("not json") {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.category(), "parse"),
//! }
//! ```

use thiserror::Error;

/// The main error type for lectern-core operations.
///
/// `Display` provides a user-facing message; the source chain is preserved for
/// wrapped I/O errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading metadata documents and configuration files. The
    /// underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A metadata document could not be interpreted as a deck.
    ///
    /// ## Common Causes
    ///
    /// - Malformed JSON
    /// - Missing `slides` or `sections` arrays
    /// - Negative or non-integer slide numbers
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Out-of-range values (for example a zero result cap)
    /// - Config directory cannot be determined on this platform
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through a retry.
    ///
    /// Only interrupted or timed-out I/O qualifies; everything else reflects
    /// bad data or bad configuration and will fail the same way again.
    ///
    /// ```rust
    /// use lectern_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
    /// assert!(!Error::Parse("bad json".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a static identifier for logging.
    ///
    /// - `"io"` - File system and I/O operations
    /// - `"parse"` - Metadata interpretation
    /// - `"serialization"` - Data format conversion
    /// - `"config"` - Configuration and settings
    /// - `"not_found"` - Missing resources
    /// - `"other"` - Uncategorized errors
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let cases = vec![
            (Error::Parse("bad slides".to_string()), "Parse error: bad slides"),
            (
                Error::Config("missing field".to_string()),
                "Configuration error: missing field",
            ),
            (Error::NotFound("deck.json".to_string()), "Not found: deck.json"),
            (Error::Other("boom".to_string()), "boom"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "metadata.json");
        let error: Error = io_error.into();

        match error {
            Error::Io(ref inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io variant"),
        }
        assert_eq!(error.category(), "io");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let error: Error = toml_error.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_recoverability() {
        assert!(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "slow disk")).is_recoverable());
        assert!(!Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "no")).is_recoverable());
        assert!(!Error::Config("x".into()).is_recoverable());
        assert!(!Error::Serialization("x".into()).is_recoverable());
    }
}
