//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Check cache for the short id
/// 2. On cache miss, query the durable store
/// 3. Repopulate the cache before responding
/// 4. Return 302 Found with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 with plain-text `Not found` if the short id doesn't exist.
/// Returns 500 on store or cache failure.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.mapping_service.resolve(&short_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
