//! DTOs for health check endpoints.

use serde::Serialize;

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub services: ServicesStatus,
}

/// Per-service connectivity breakdown.
#[derive(Debug, Serialize)]
pub struct ServicesStatus {
    pub database: &'static str,
    pub redis: &'static str,
}

/// Response for `GET /health/liveness`.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Response for `GET /health/readiness`.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
