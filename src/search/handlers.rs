use super::engine::{QueryEngine, SearchError};
use super::types::{ErrorResponse, HealthResponse, SearchParams};
use crate::records::types::StudentRecord;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// Rejection returned to HTTP callers as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery => Self::bad_request(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub async fn handle_search(
    Extension(engine): Extension<Arc<QueryEngine>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Rejected search parameters: {}", rejection);
        ApiError::from(rejection)
    })?;

    let query = params.query.unwrap_or_default();
    let results = match engine.search(&query, params.limit) {
        Ok(results) => results,
        Err(err) => {
            tracing::debug!("Rejected search query {:?}: {}", query, err);
            return Err(err.into());
        }
    };

    tracing::debug!(
        "Search {:?} (limit={:?}) matched {} records",
        query,
        params.limit,
        results.len()
    );

    Ok(Json(results.into_iter().cloned().collect()))
}

pub async fn handle_list_students(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Json<Vec<StudentRecord>> {
    Json(engine.store().all().to_vec())
}

pub async fn handle_health(Extension(engine): Extension<Arc<QueryEngine>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: engine.store().len(),
    })
}
