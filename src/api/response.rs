//! Response bodies and error mapping for the swipe tracker API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{CardStats, DaySummary, MonthSummary};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// The request body was not valid JSON for the endpoint.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// The swipe action was neither `IN` nor `OUT`.
    pub fn invalid_action(action: &str) -> Self {
        Self::with_details(
            "INVALID_ACTION",
            "Invalid action",
            format!("Action '{}' must be IN or OUT", action),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        match error {
            TrackerError::UnrecognizedDirection { label } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_action(&label),
            },
            TrackerError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "SERVICE_UNAVAILABLE",
                    "Swipe log not ready",
                    message,
                ),
            },
            other @ (TrackerError::ConfigNotFound { .. }
            | TrackerError::ConfigParseError { .. }
            | TrackerError::InvalidTimeZone { .. }
            | TrackerError::InvalidConfig { .. }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    other.to_string(),
                ),
            },
        }
    }
}

/// Response body for `GET /track`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackResponse {
    /// The card the stats belong to.
    pub card_no: String,
    /// Day summaries, ascending by date.
    pub per_day: Vec<DaySummary>,
    /// Month summaries, ascending by year and month.
    pub months: Vec<MonthSummary>,
}

impl TrackResponse {
    /// Wraps computed stats with the card they were computed for.
    pub fn new(card_no: impl Into<String>, stats: CardStats) -> Self {
        Self {
            card_no: card_no.into(),
            per_day: stats.per_day,
            months: stats.months,
        }
    }
}
