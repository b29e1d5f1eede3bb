//! Request types for the swipe tracker API.

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::{Direction, normalize_card_no};

/// Request body for `POST /swipe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    /// The badge number. Blank or absent means `USER1`.
    #[serde(default)]
    pub card_no: Option<String>,
    /// `IN` or `OUT`.
    pub action: String,
}

impl SwipeRequest {
    /// The card number after trimming and defaulting.
    pub fn card_no(&self) -> String {
        normalize_card_no(self.card_no.as_deref())
    }

    /// Parses the action into a [`Direction`].
    pub fn direction(&self) -> TrackerResult<Direction> {
        self.action.parse()
    }
}

/// Query string for `GET /track`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackQuery {
    /// The badge to report on. Blank or absent means `USER1`.
    #[serde(default)]
    pub card_no: Option<String>,
}

impl TrackQuery {
    /// The card number after trimming and defaulting.
    pub fn card_no(&self) -> String {
        normalize_card_no(self.card_no.as_deref())
    }
}
