//! Configuration types for the swipe tracker.
//!
//! [`TrackerSettings`] is the raw YAML document; [`TrackerConfig`] is the
//! validated form handed to the normalizer and aggregator.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};

/// Time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

/// Daily working target in minutes (8 hours).
pub const DEFAULT_DAILY_TARGET_MINUTES: i64 = 480;

const TIME_FORMAT: &str = "%H:%M";

/// The daily lunch window, in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl LunchWindow {
    /// Creates a lunch window, rejecting windows where `start >= end`.
    ///
    /// # Example
    ///
    /// ```
    /// use swipe_tracker::config::LunchWindow;
    /// use chrono::NaiveTime;
    ///
    /// let start = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(13, 15, 0).unwrap();
    /// let window = LunchWindow::new(start, end).unwrap();
    /// assert_eq!(window.start(), start);
    ///
    /// assert!(LunchWindow::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveTime, end: NaiveTime) -> TrackerResult<Self> {
        if start >= end {
            return Err(TrackerError::InvalidConfig {
                field: "lunch_window".to_string(),
                message: format!(
                    "start {} must be before end {}",
                    start.format(TIME_FORMAT),
                    end.format(TIME_FORMAT)
                ),
            });
        }
        Ok(Self { start, end })
    }

    /// Start of the window.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the window.
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl Default for LunchWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(13, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
        }
    }
}

/// Validated, process-wide tracker configuration.
///
/// Passed explicitly into the calculation functions; nothing in the core
/// reads configuration from anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    time_zone: Tz,
    daily_target_minutes: i64,
    lunch_window: Option<LunchWindow>,
}

impl TrackerConfig {
    /// Creates a configuration from already-validated parts.
    pub fn new(time_zone: Tz, daily_target_minutes: i64, lunch_window: Option<LunchWindow>) -> Self {
        Self {
            time_zone,
            daily_target_minutes,
            lunch_window,
        }
    }

    /// Returns a copy with the given lunch window.
    pub fn with_lunch_window(mut self, lunch_window: LunchWindow) -> Self {
        self.lunch_window = Some(lunch_window);
        self
    }

    /// Returns a copy with lunch deduction disabled.
    pub fn without_lunch(mut self) -> Self {
        self.lunch_window = None;
        self
    }

    /// Returns a copy using the given time zone.
    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// The local time zone swipes are bucketed in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Minutes expected per day.
    pub fn daily_target_minutes(&self) -> i64 {
        self.daily_target_minutes
    }

    /// The lunch window, if lunch deduction is enabled.
    pub fn lunch_window(&self) -> Option<LunchWindow> {
        self.lunch_window
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            time_zone: Tz::Asia__Kolkata,
            daily_target_minutes: DEFAULT_DAILY_TARGET_MINUTES,
            lunch_window: Some(LunchWindow::default()),
        }
    }
}

/// Lunch window as written in YAML (`"HH:MM"` strings).
#[derive(Debug, Clone, Deserialize)]
pub struct LunchWindowSettings {
    /// Window start, `HH:MM`.
    pub start: String,
    /// Window end, `HH:MM`.
    pub end: String,
}

/// Raw configuration document.
///
/// Every field is optional; missing fields take the documented defaults.
/// An explicit `lunch_window: null` disables lunch deduction.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerSettings {
    /// IANA time zone identifier.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Daily target in minutes.
    #[serde(default = "default_daily_target_minutes")]
    pub daily_target_minutes: i64,
    /// Lunch window; `null` disables it.
    #[serde(default = "default_lunch_window")]
    pub lunch_window: Option<LunchWindowSettings>,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_daily_target_minutes() -> i64 {
    DEFAULT_DAILY_TARGET_MINUTES
}

fn default_lunch_window() -> Option<LunchWindowSettings> {
    Some(LunchWindowSettings {
        start: "13:00".to_string(),
        end: "14:00".to_string(),
    })
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            daily_target_minutes: default_daily_target_minutes(),
            lunch_window: default_lunch_window(),
        }
    }
}

impl TrackerSettings {
    /// Validates the raw settings into a [`TrackerConfig`].
    ///
    /// Fails when the zone does not resolve, the target is not positive, or
    /// the lunch window is malformed.
    pub fn validate(&self) -> TrackerResult<TrackerConfig> {
        let time_zone: Tz =
            self.time_zone
                .trim()
                .parse()
                .map_err(|_| TrackerError::InvalidTimeZone {
                    name: self.time_zone.clone(),
                })?;

        if self.daily_target_minutes <= 0 {
            return Err(TrackerError::InvalidConfig {
                field: "daily_target_minutes".to_string(),
                message: format!("must be positive, got {}", self.daily_target_minutes),
            });
        }

        let lunch_window = match &self.lunch_window {
            Some(window) => Some(LunchWindow::new(
                parse_wall_time("lunch_window.start", &window.start)?,
                parse_wall_time("lunch_window.end", &window.end)?,
            )?),
            None => None,
        };

        Ok(TrackerConfig::new(
            time_zone,
            self.daily_target_minutes,
            lunch_window,
        ))
    }
}

fn parse_wall_time(field: &str, value: &str) -> TrackerResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|e| TrackerError::InvalidConfig {
        field: field.to_string(),
        message: format!("expected HH:MM, got '{}' ({})", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_default_config_matches_deployment_values() {
        let config = TrackerConfig::default();
        assert_eq!(config.time_zone(), Tz::Asia__Kolkata);
        assert_eq!(config.daily_target_minutes(), 480);
        let lunch = config.lunch_window().unwrap();
        assert_eq!(lunch.start(), make_time("13:00"));
        assert_eq!(lunch.end(), make_time("14:00"));
    }

    #[test]
    fn test_default_settings_validate_to_default_config() {
        let config = TrackerSettings::default().validate().unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let settings = TrackerSettings {
            time_zone: "Nowhere/Special".to_string(),
            ..TrackerSettings::default()
        };
        match settings.validate() {
            Err(TrackerError::InvalidTimeZone { name }) => assert_eq!(name, "Nowhere/Special"),
            other => panic!("Expected InvalidTimeZone, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_target_is_rejected() {
        let settings = TrackerSettings {
            daily_target_minutes: 0,
            ..TrackerSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(TrackerError::InvalidConfig { ref field, .. }) if field == "daily_target_minutes"
        ));
    }

    #[test]
    fn test_malformed_lunch_time_is_rejected() {
        let settings = TrackerSettings {
            lunch_window: Some(LunchWindowSettings {
                start: "1pm".to_string(),
                end: "14:00".to_string(),
            }),
            ..TrackerSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(TrackerError::InvalidConfig { ref field, .. }) if field == "lunch_window.start"
        ));
    }

    #[test]
    fn test_inverted_lunch_window_is_rejected() {
        let result = LunchWindow::new(make_time("14:00"), make_time("13:00"));
        assert!(result.is_err());

        let empty = LunchWindow::new(make_time("13:00"), make_time("13:00"));
        assert!(empty.is_err());
    }

    #[test]
    fn test_missing_lunch_window_disables_deduction() {
        let settings = TrackerSettings {
            lunch_window: None,
            ..TrackerSettings::default()
        };
        let config = settings.validate().unwrap();
        assert!(config.lunch_window().is_none());
    }

    #[test]
    fn test_builders() {
        let config = TrackerConfig::default()
            .without_lunch()
            .with_time_zone(Tz::UTC);
        assert!(config.lunch_window().is_none());
        assert_eq!(config.time_zone(), Tz::UTC);

        let window = LunchWindow::new(make_time("12:00"), make_time("12:30")).unwrap();
        let config = config.with_lunch_window(window);
        assert_eq!(config.lunch_window(), Some(window));
    }
}
