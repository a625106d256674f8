//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /shorten`.
///
/// The URL is accepted verbatim; the service does not validate its shape.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub original_url: String,
}

/// Response body for `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
}
