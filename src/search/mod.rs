//! Search Service Module
//!
//! Answers name lookups against the in-memory `RecordStore`.
//!
//! ## Overview
//! A query is trimmed, checked for a minimum length, lowercased and matched as a
//! substring of each student's lowercased name. Matches keep store order and are
//! cut off at the requested limit. There is no scoring.
//!
//! ## Submodules
//! - **`engine`**: `QueryEngine`, limits and `SearchError`.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
