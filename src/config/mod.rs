//! Configuration loading and management for the swipe tracker.
//!
//! Holds the local time zone, the daily target and the lunch window. The
//! validated [`TrackerConfig`] is passed into every calculation explicitly.
//!
//! # Example
//!
//! ```no_run
//! use swipe_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker.yaml").unwrap().into_config();
//! println!("Tracking in {}", config.time_zone());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_DAILY_TARGET_MINUTES, DEFAULT_TIME_ZONE, LunchWindow, LunchWindowSettings,
    TrackerConfig, TrackerSettings,
};
