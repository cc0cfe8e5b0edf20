//! # Error Types
//!
//! The caller-visible error contract of the store.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  sqlx::Error (adapter internals)                                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (shelf-db) ← classifies the storage failure                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← what callers match on                   │
//! │       ├── NotFound     : recoverable, id did not resolve            │
//! │       └── Persistence  : surfaced uninterpreted, no local recovery  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. "Not found" is a typed variant, never a stringly runtime error
//! 2. Storage failures propagate immediately; there is no retry policy
//! 3. `get_by_id` returns `Ok(None)` for absence - only update/delete
//!    treat a missing id as an error

use thiserror::Error;

use crate::types::ProductId;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product exists for the given id.
    ///
    /// Raised by update and delete. Lookups signal absence with
    /// `Ok(None)` instead.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The persistence layer failed.
    ///
    /// Connectivity loss, constraint violations, pool exhaustion - the
    /// underlying message is carried through unmodified.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl StoreError {
    /// True if this is the recoverable not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_carries_id() {
        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "product not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn persistence_is_not_not_found() {
        let err = StoreError::Persistence("disk full".into());
        assert!(!err.is_not_found());
    }
}
