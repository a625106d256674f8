//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::{HealthResponse, LivenessResponse, ReadinessResponse, ServicesStatus};
use crate::application::services::HealthReport;
use crate::state::AppState;

/// Returns service health status with per-service breakdown.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both the database and Redis respond
/// - **503 Service Unavailable**: Either probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-08-29T12:00:00.000Z",
///   "services": {
///     "database": "connected",
///     "redis": "connected"
///   }
/// }
/// ```
///
/// An unhealthy response additionally carries the first probe failure in
/// `error`, and the failing service(s) are marked `"error"`.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let report = state.health_service.report().await;

    let healthy = report.healthy();
    let response = health_response(&report);

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports process-alive status without touching any collaborator.
///
/// # Endpoint
///
/// `GET /health/liveness`
///
/// Always returns 200 as long as the process can execute the check.
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive",
        timestamp: now_timestamp(),
    })
}

/// Reports whether the service is ready to accept traffic.
///
/// # Endpoint
///
/// `GET /health/readiness`
///
/// Performs the same two probes as `GET /health` but reports a bare
/// ready/not-ready status instead of a per-service breakdown.
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let report = state.health_service.report().await;

    if report.healthy() {
        Ok(Json(ReadinessResponse {
            status: "ready",
            timestamp: now_timestamp(),
            error: None,
        }))
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not ready",
                timestamp: now_timestamp(),
                error: report.first_error().map(str::to_string),
            }),
        ))
    }
}

fn health_response(report: &HealthReport) -> HealthResponse {
    HealthResponse {
        status: if report.healthy() {
            "healthy"
        } else {
            "unhealthy"
        },
        timestamp: now_timestamp(),
        error: report.first_error().map(str::to_string),
        services: ServicesStatus {
            database: report.database.as_str(),
            redis: report.redis.as_str(),
        },
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
