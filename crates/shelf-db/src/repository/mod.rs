//! # Repository Module
//!
//! Concrete [`shelf_store::ProductRepository`] adapters.
//!
//! SQL lives here and nowhere else. The store facade sees only the trait;
//! swapping SQLite for another engine means adding a sibling module that
//! implements the same trait.

pub mod product;
