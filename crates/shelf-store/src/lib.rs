//! # shelf-store: Product Store Facade
//!
//! The single component of Shelf: [`ProductStore`], a facade over a
//! generic persistence capability, [`ProductRepository`].
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                              │
//! │                                                                     │
//! │  Caller (HTTP layer, CLI, tests - out of scope here)                │
//! │       │                                                             │
//! │       │  store.update(1, draft)                                     │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 shelf-store (THIS CRATE)                      │  │
//! │  │                                                               │  │
//! │  │   ProductStore<R> ──delegates──► R: ProductRepository         │  │
//! │  │   (one storage call per operation, nothing cached)            │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │                                 ▼                                   │
//! │  SqliteProductRepository (shelf-db) or in-memory map (tests)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_store::ProductStore;
//!
//! let store = ProductStore::new(db.products());
//! let pen = store.create(ProductDraft::new("Pen", Money::from_cents(150), 10)).await?;
//! let hits = store.search_by_name("pen").await?;
//! ```

pub mod repository;
pub mod store;

pub use repository::ProductRepository;
pub use store::ProductStore;
