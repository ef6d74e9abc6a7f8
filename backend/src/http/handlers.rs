//! HTTP handlers for the REST API.

use axum::Json;
use tracing::{debug, warn};

use super::error::AppError;
use crate::api::{HealthCheck, OpeningHoursRequest, OpeningHoursResponse};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET {prefix}/healthcheck
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck::healthy())
}

/// POST {prefix}/schedules
///
/// Validate a week of raw open/close events and return the rendered schedule.
/// The body is parsed here rather than through `Json<T>` so schema failures
/// report the JSON path of the offending field.
pub async fn humanize_opening_hours(body: String) -> HandlerResult<OpeningHoursResponse> {
    let request = OpeningHoursRequest::from_json_str(&body).map_err(|e| {
        warn!(path = %e.path, "Rejected opening hours payload: {}", e);
        AppError::from(e)
    })?;

    let response = request.humanize().map_err(|e| {
        warn!("Rejected opening hours: {}", e);
        AppError::from(e)
    })?;

    debug!(days = response.opening_hours.len(), "Rendered opening hours");
    Ok(Json(response))
}
