use serde::{Deserialize, Serialize};

/// Query string of `GET /api/students/search`.
///
/// `query` is optional here so that a missing query gets the same JSON
/// rejection as a short one instead of a generic extractor error.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}
