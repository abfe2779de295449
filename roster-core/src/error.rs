//! Error types for data fetching and configuration.
//!
//! Pagination itself never fails: out-of-range pages are clamped. The only
//! runtime failure a table view sees is a [`FetchError`] from its provider,
//! which is kept as a display string and shown to the user.

use thiserror::Error;

/// Failure reported by a [`crate::ports::TableSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider could not be reached or answered with an error.
    #[error("{0}")]
    Transport(String),

    /// No answer arrived within the configured fetch timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value could not be parsed for the given key.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Environment key.
        key: &'static str,
        /// Raw value found.
        value: String,
    },

    /// Page size outside the offered options.
    #[error("unsupported page size {0}; expected one of 5, 10, 20, 50")]
    UnsupportedPageSize(usize),
}

/// Result type for provider fetches.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_the_raw_message() {
        let err = FetchError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(
            FetchError::Timeout(1500).to_string(),
            "request timed out after 1500 ms"
        );
    }

    #[test]
    fn config_error_names_the_key() {
        let err = ConfigError::InvalidValue {
            key: "ROSTER_WINDOW_RADIUS",
            value: "wide".into(),
        };
        assert!(err.to_string().contains("ROSTER_WINDOW_RADIUS"));
        assert!(err.to_string().contains("wide"));
    }
}
