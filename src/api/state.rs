//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::config::TrackerConfig;
use crate::store::SwipeLog;

/// Shared application state.
///
/// Holds the validated tracker configuration and the swipe log. Both are
/// reference-counted so the state clones cheaply per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<TrackerConfig>,
    log: Arc<dyn SwipeLog>,
}

impl AppState {
    /// Creates application state from a configuration and a swipe log.
    pub fn new(config: TrackerConfig, log: Arc<dyn SwipeLog>) -> Self {
        Self {
            config: Arc::new(config),
            log,
        }
    }

    /// Returns the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the swipe log.
    pub fn log(&self) -> &dyn SwipeLog {
        self.log.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySwipeLog;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_log() {
        let state = AppState::new(TrackerConfig::default(), Arc::new(InMemorySwipeLog::new()));
        let clone = state.clone();
        assert_eq!(clone.config(), state.config());
        assert!(std::ptr::addr_eq(clone.log(), state.log()));
    }
}
