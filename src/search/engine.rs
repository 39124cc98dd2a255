use crate::records::store::RecordStore;
use crate::records::types::StudentRecord;
use std::sync::Arc;
use thiserror::Error;

/// Shortest query (in characters, after trimming) the engine will scan for.
pub const MIN_QUERY_CHARS: usize = 3;
pub const DEFAULT_LIMIT: usize = 5;
/// Upper bound on results per request, regardless of what the caller asks for.
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Query must be at least 3 characters long")]
    InvalidQuery,
}

/// Case-insensitive substring search over a `RecordStore` snapshot.
///
/// The engine holds no mutable state; one instance is shared by every request.
#[derive(Debug)]
pub struct QueryEngine {
    store: Arc<RecordStore>,
    default_limit: usize,
    max_limit: usize,
}

impl QueryEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_limits(store, DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn with_limits(store: Arc<RecordStore>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            store,
            default_limit: default_limit.min(max_limit),
            max_limit,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Resolves the effective limit: default when absent, clamped to the cap.
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Returns the first `limit` records whose name contains `query`,
    /// ignoring case, in store order.
    ///
    /// The query is trimmed first and rejected with `InvalidQuery` if fewer
    /// than three characters remain. The store is not touched in that case.
    pub fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<&StudentRecord>, SearchError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(SearchError::InvalidQuery);
        }

        let limit = self.effective_limit(limit);
        let needle = query.to_lowercase();

        Ok(self
            .store
            .all()
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect())
    }
}
