//! # Repository Capability
//!
//! The persistence contract the store requires from an adapter.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Repository Pattern Explained                       │
//! │                                                                     │
//! │  ProductStore<R>                                                    │
//! │       │                                                             │
//! │       │ insert / find_all / find_by_id / update / delete ...        │
//! │       ▼                                                             │
//! │  R: ProductRepository  ← the only thing the store knows about       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SqliteProductRepository (shelf-db) ─► SQLite                       │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Easy to test (in-memory map implements the same trait)           │
//! │  • Can swap database implementations                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use shelf_core::{Product, ProductDraft, ProductId, StoreResult};

/// Persistence operations for [`Product`] entities.
///
/// The adapter is the sole owner of durable state. Each method is one
/// storage call and runs as one implicit transaction, so the guarded
/// write in [`update`](ProductRepository::update) and
/// [`delete`](ProductRepository::delete) cannot interleave with a
/// concurrent operation on the same id into a partial state.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with its assigned id.
    async fn insert(&self, draft: &ProductDraft) -> StoreResult<Product>;

    /// Returns every persisted product, freshly read on each call.
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Looks up a product by id. Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

    /// Returns products whose name contains `needle` literally, ignoring
    /// ASCII case. An empty needle matches everything.
    ///
    /// Case folding is ASCII-only across all adapters (SQLite's LIKE
    /// folds `A-Z` and nothing else); `%` and `_` have no wildcard
    /// meaning here.
    async fn find_by_name_containing(&self, needle: &str) -> StoreResult<Vec<Product>>;

    /// Returns products with stock strictly greater than `threshold`.
    async fn find_by_stock_above(&self, threshold: i64) -> StoreResult<Vec<Product>>;

    /// Overwrites the four mutable fields of the product with the given id
    /// and returns the updated entity.
    ///
    /// The whole draft is applied unconditionally; there is no partial
    /// merge. Fails with `StoreError::NotFound` if the id does not exist.
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product>;

    /// Removes the product with the given id.
    ///
    /// Fails with `StoreError::NotFound` if the id does not exist; a
    /// missing row never silently no-ops.
    async fn delete(&self, id: ProductId) -> StoreResult<()>;

    /// Removes every product. Returns the number of rows removed
    /// (used for logging; callers of the store see `()`).
    async fn delete_all(&self) -> StoreResult<u64>;
}
