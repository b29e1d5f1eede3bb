//! HTTP request handlers for the swipe tracker API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::Normalizer;
use crate::error::TrackerError;
use crate::models::SwipeRecord;
use crate::store::stats_for_card;

use super::request::{SwipeRequest, TrackQuery};
use super::response::{ApiError, ApiErrorResponse, TrackResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/swipe", post(swipe_handler))
        .route("/track", get(track_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(error: TrackerError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /swipe.
///
/// Records a swipe at the current instant and returns the stored record.
async fn swipe_handler(
    State(state): State<AppState>,
    payload: Result<Json<SwipeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing swipe request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let direction = match request.direction() {
        Ok(direction) => direction,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                action = %request.action,
                "Rejected swipe with invalid action"
            );
            return error_response(err);
        }
    };

    let card_no = request.card_no();
    let now = Normalizer::from_config(state.config()).normalize(&Utc::now());
    let record = SwipeRecord::new(card_no, direction, now);

    match state.log().append(record.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                card_no = %record.card_no,
                reader_name = %record.reader_name,
                time = %record.time,
                "Swipe recorded"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to record swipe"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /track.
///
/// Recomputes the per-day and per-month stats for one card.
async fn track_handler(State(state): State<AppState>, Query(query): Query<TrackQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let card_no = query.card_no();
    info!(correlation_id = %correlation_id, card_no = %card_no, "Processing track request");

    let start_time = Instant::now();
    match stats_for_card(state.log(), &card_no, state.config()) {
        Ok(stats) => {
            info!(
                correlation_id = %correlation_id,
                card_no = %card_no,
                days = stats.per_day.len(),
                months = stats.months.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Stats computed"
            );
            json_response(StatusCode::OK, TrackResponse::new(card_no, stats))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to compute stats"
            );
            error_response(err)
        }
    }
}
