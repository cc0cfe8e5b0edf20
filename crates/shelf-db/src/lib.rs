//! # shelf-db: Database Layer for Shelf
//!
//! SQLite persistence for the product store, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                              │
//! │                                                                     │
//! │  ProductStore (shelf-store)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  shelf-db (THIS CRATE)                        │  │
//! │  │                                                               │  │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌──────────────┐     │  │
//! │  │   │  Database   │   │  Repository   │   │  Migrations  │     │  │
//! │  │   │  (pool.rs)  │◄──│ (product.rs)  │   │  (embedded)  │     │  │
//! │  │   └─────────────┘   └───────────────┘   └──────────────┘     │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 ▼                                   │
//! │                         SQLite database file                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_db::{Database, DbConfig};
//! use shelf_store::ProductStore;
//!
//! let db = Database::new(DbConfig::new("shelf.db")).await?;
//! let store = ProductStore::new(db.products());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::SqliteProductRepository;
