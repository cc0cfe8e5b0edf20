//! # shelf-core: Pure Domain Types for Shelf
//!
//! The domain vocabulary for the Shelf product store. Every type here is
//! plain data or a pure function; no I/O is allowed in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Shelf Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │               ★ shelf-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐               │  │
//! │  │   │   types   │   │   money   │   │   error   │               │  │
//! │  │   │  Product  │   │   Money   │   │ StoreError│               │  │
//! │  │   │   Draft   │   │  (cents)  │   │  NotFound │               │  │
//! │  │   └───────────┘   └───────────┘   └───────────┘               │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO ASYNC • PLAIN TYPES               │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              shelf-store (ProductStore facade)                │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              shelf-db (SQLite adapter, sqlx)                  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - The caller-visible error contract

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use money::Money;
pub use types::{Product, ProductDraft, ProductId};
