//! Record Store Module
//!
//! Holds the student records the search service answers from.
//!
//! ## Lifecycle
//! The store is loaded once at startup from a static JSON file and is never
//! mutated afterwards. Handlers share it read-only behind an `Arc`, so there is
//! no locking anywhere on the request path.
//!
//! ## Submodules
//! - **`store`**: `RecordStore` and its loading logic.
//! - **`types`**: `StudentRecord` and `RollNumber` as they appear on the wire.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
