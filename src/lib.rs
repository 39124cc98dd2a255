//! Student Search Library
//!
//! Core of the student lookup service. The binary (`main.rs`) wires these
//! modules into an Axum server.
//!
//! ## Modules
//! - **`records`**: The immutable `RecordStore`, loaded once from a JSON file at startup.
//! - **`search`**: The `QueryEngine` (case-insensitive substring match, store order,
//!   capped limit) and the HTTP handlers exposing it.
//! - **`config`**: Bind address and data file location from flags and environment.

pub mod config;
pub mod records;
pub mod search;
