//! Error types for the swipe tracker.
//!
//! The pairing and aggregation core never fails; these errors come from
//! configuration, ingestion and the event log.

use thiserror::Error;

/// The main error type for the swipe tracker.
///
/// # Example
///
/// ```
/// use swipe_tracker::error::TrackerError;
///
/// let error = TrackerError::InvalidTimeZone {
///     name: "Mars/Olympus".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown time zone: Mars/Olympus");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured time zone is not a known IANA identifier.
    ///
    /// Raised only while building configuration, never mid-computation.
    #[error("Unknown time zone: {name}")]
    InvalidTimeZone {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// A configuration value was out of range or malformed.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A swipe direction or reader label matched neither IN nor OUT.
    #[error("Unrecognized swipe direction: {label}")]
    UnrecognizedDirection {
        /// The rejected label.
        label: String,
    },

    /// The event log could not be read or written.
    #[error("Swipe log unavailable: {message}")]
    StoreUnavailable {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/tracker.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tracker.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = TrackerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = TrackerError::InvalidConfig {
            field: "lunch_window".to_string(),
            message: "start must be before end".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'lunch_window': start must be before end"
        );
    }

    #[test]
    fn test_unrecognized_direction_displays_label() {
        let error = TrackerError::UnrecognizedDirection {
            label: "Side Door - MAYBE".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unrecognized swipe direction: Side Door - MAYBE"
        );
    }

    #[test]
    fn test_store_unavailable_displays_message() {
        let error = TrackerError::StoreUnavailable {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Swipe log unavailable: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }
}
