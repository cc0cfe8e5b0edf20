//! # Product Store
//!
//! The facade callers interact with. Every operation validates nothing,
//! caches nothing, and delegates straight to the repository; the only
//! logic that lives here is logging and the unit-result shape of
//! `delete_all`.

use tracing::debug;

use shelf_core::{Product, ProductDraft, ProductId, StoreResult};

use crate::repository::ProductRepository;

/// Facade over a [`ProductRepository`], offering the composed CRUD
/// operations of the store.
///
/// The repository is constructor-injected; swapping storage backends is
/// a matter of passing a different adapter.
///
/// ## Usage
/// ```rust,ignore
/// let store = ProductStore::new(db.products());
///
/// let pen = store
///     .create(ProductDraft::new("Pen", Money::from_cents(150), 10))
///     .await?;
/// assert_eq!(store.get_by_id(pen.id).await?, Some(pen));
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore<R> {
    repo: R,
}

impl<R: ProductRepository> ProductStore<R> {
    /// Creates a store over the given repository.
    pub fn new(repo: R) -> Self {
        ProductStore { repo }
    }

    /// Persists a new product and returns it with its assigned id.
    pub async fn create(&self, draft: ProductDraft) -> StoreResult<Product> {
        debug!(name = %draft.name, "create product");
        self.repo.insert(&draft).await
    }

    /// Lists every product, freshly read on each call.
    ///
    /// Order is the persistence layer's default and not part of the
    /// contract.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let products = self.repo.find_all().await?;
        debug!(count = products.len(), "list_all");
        Ok(products)
    }

    /// Looks up a product by id.
    ///
    /// Absence is `Ok(None)` - "not found" is not an error for reads.
    pub async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        debug!(id = %id, "get_by_id");
        self.repo.find_by_id(id).await
    }

    /// Returns products whose name contains `needle`, case-insensitive.
    ///
    /// An empty needle matches every product.
    pub async fn search_by_name(&self, needle: &str) -> StoreResult<Vec<Product>> {
        let products = self.repo.find_by_name_containing(needle).await?;
        debug!(needle = %needle, count = products.len(), "search_by_name");
        Ok(products)
    }

    /// Returns products with stock strictly greater than `threshold`.
    ///
    /// Stock equal to the threshold is excluded.
    pub async fn filter_by_stock_above(&self, threshold: i64) -> StoreResult<Vec<Product>> {
        let products = self.repo.find_by_stock_above(threshold).await?;
        debug!(threshold = %threshold, count = products.len(), "filter_by_stock_above");
        Ok(products)
    }

    /// Overwrites all four mutable fields of the product with the given id.
    ///
    /// The draft is applied unconditionally, empty/zero fields included;
    /// partial update is deliberately NOT supported. Fails with
    /// `StoreError::NotFound` when the id does not resolve.
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> StoreResult<Product> {
        debug!(id = %id, name = %draft.name, "update product");
        self.repo.update(id, &draft).await
    }

    /// Permanently removes the product with the given id.
    ///
    /// Fails with `StoreError::NotFound` when the id does not resolve.
    pub async fn delete(&self, id: ProductId) -> StoreResult<()> {
        debug!(id = %id, "delete product");
        self.repo.delete(id).await
    }

    /// Removes every product. Unconditional and irreversible.
    pub async fn delete_all(&self) -> StoreResult<()> {
        let removed = self.repo.delete_all().await?;
        debug!(removed = %removed, "delete_all");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// The facade contract is exercised against an in-memory map repository;
// the SQLite adapter has its own tests in shelf-db.
