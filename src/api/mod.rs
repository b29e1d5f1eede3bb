//! HTTP API for recording swipes and reading back worked-time stats.
//!
//! `POST /swipe` appends a swipe at the current instant. `GET /track`
//! recomputes a card's per-day and per-month summaries from the log.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{SwipeRequest, TrackQuery};
pub use response::{ApiError, ApiErrorResponse, TrackResponse};
pub use state::AppState;
