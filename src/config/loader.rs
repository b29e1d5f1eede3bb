//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TrackerError, TrackerResult};

use super::types::{TrackerConfig, TrackerSettings};

/// Loads and validates tracker configuration.
///
/// # File Format
///
/// ```text
/// time_zone: Asia/Kolkata
/// daily_target_minutes: 480
/// lunch_window:
///   start: "13:00"
///   end: "14:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use swipe_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracker.yaml").unwrap();
/// println!("Time zone: {}", loader.config().time_zone());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The time zone does not resolve or another value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            time_zone = %loader.config.time_zone(),
            daily_target_minutes = loader.config.daily_target_minutes(),
            lunch_enabled = loader.config.lunch_window().is_some(),
            "Loaded tracker configuration"
        );
        Ok(loader)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use swipe_tracker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("time_zone: UTC\nlunch_window: null\n")?;
    /// assert!(loader.config().lunch_window().is_none());
    /// assert_eq!(loader.config().daily_target_minutes(), 480);
    /// # Ok::<(), swipe_tracker::error::TrackerError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> TrackerResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> TrackerResult<Self> {
        let settings: TrackerSettings =
            serde_yaml::from_str(content).map_err(|e| TrackerError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config: settings.validate()?,
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Consumes the loader, returning the validated configuration.
    pub fn into_config(self) -> TrackerConfig {
        self.config
    }
}
