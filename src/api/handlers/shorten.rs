//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short id for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "Ab3dE9x" }
/// ```
///
/// # Errors
///
/// Returns 500 if the store write or the subsequent cache write fails. On a
/// cache failure the mapping already exists in the store and will be cached on
/// the next resolve.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short_id = state.mapping_service.shorten(payload.original_url).await?;

    Ok(Json(ShortenResponse { short_id }))
}
