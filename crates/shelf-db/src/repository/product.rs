//! # Product Repository (SQLite)
//!
//! The SQLite implementation of the [`ProductRepository`] capability.
//!
//! ## Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │               One Operation = One Statement                         │
//! │                                                                     │
//! │  update(id, draft)                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UPDATE products SET ... WHERE id = ?1 RETURNING ...                │
//! │       │                                                             │
//! │       ├── row returned  → updated Product                           │
//! │       └── no row        → StoreError::NotFound                      │
//! │                                                                     │
//! │  The existence check and the write are the same statement, so a     │
//! │  concurrent delete of the same id cannot slip in between them.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Search
//! Substring match uses `LIKE '%' || needle || '%' ESCAPE '\'`, with
//! `\`, `%` and `_` escaped in the needle so they match literally
//! instead of acting as wildcards. SQLite's LIKE is case-insensitive
//! for ASCII, which is exactly the contract. An empty needle
//! degenerates to `LIKE '%%'` and matches every row.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbError;
use shelf_core::{Product, ProductDraft, ProductId, StoreError, StoreResult};
use shelf_store::ProductRepository;

/// Escapes LIKE metacharacters so the needle matches literally.
///
/// `%` and `_` are wildcards in a LIKE pattern; the backslash is our
/// ESCAPE character and must be escaped first.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SQLite-backed repository for product rows.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let all = repo.find_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Creates a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductRepository { pool }
    }

    /// Counts product rows (for diagnostics).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> StoreResult<Product> {
        debug!(name = %draft.name, "inserting product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price_cents, stock, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price_cents)
        .bind(draft.stock)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price_cents: draft.price_cents,
            stock: draft.stock,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, stock, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        debug!(count = products.len(), "find_all");
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, stock, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(product)
    }

    async fn find_by_name_containing(&self, needle: &str) -> StoreResult<Vec<Product>> {
        debug!(needle = %needle, "searching products by name");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, stock, created_at, updated_at
            FROM products
            WHERE name LIKE '%' || ?1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(needle))
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        debug!(count = products.len(), "search returned products");
        Ok(products)
    }

    async fn find_by_stock_above(&self, threshold: i64) -> StoreResult<Vec<Product>> {
        // Strict inequality: stock == threshold is excluded.
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, stock, created_at, updated_at
            FROM products
            WHERE stock > ?1
            ORDER BY id
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(products)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product> {
        debug!(id = %id, "updating product");

        let now = Utc::now();

        // Single guarded statement: no row means the id doesn't exist.
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                stock = ?5,
                updated_at = ?6
            WHERE id = ?1
            RETURNING id, name, description, price_cents, stock, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price_cents)
        .bind(draft.stock)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        updated.ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        debug!(id = %id, "deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        debug!(removed = result.rows_affected(), "delete_all");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use shelf_core::Money;

    async fn repo() -> SqliteProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn pen() -> ProductDraft {
        ProductDraft::new("Pen", Money::from_cents(150), 10).description("Ballpoint, blue ink")
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_from_one() {
        let repo = repo().await;

        let first = repo.insert(&pen()).await.unwrap();
        let second = repo
            .insert(&ProductDraft::new("Notebook", Money::from_cents(500), 4))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn insert_then_find_by_id_round_trips_fields() {
        let repo = repo().await;
        let draft = pen();

        let created = repo.insert(&draft).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, draft.name);
        assert_eq!(fetched.description, draft.description);
        assert_eq!(fetched.price_cents, draft.price_cents);
        assert_eq!(fetched.stock, draft.stock);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn find_by_id_absent_is_none() {
        let repo = repo().await;
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn name_search_ignores_case() {
        let repo = repo().await;
        repo.insert(&ProductDraft::new("Widget Pro 2000", Money::from_cents(999), 3))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("Basic Widget", Money::from_cents(499), 3))
            .await
            .unwrap();

        let hits = repo.find_by_name_containing("PRO").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Widget Pro 2000");

        let all = repo.find_by_name_containing("").await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn name_search_treats_wildcards_as_literals() {
        let repo = repo().await;
        repo.insert(&ProductDraft::new("Widget", Money::from_cents(999), 3))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("Pen", Money::from_cents(150), 10))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("100% Cotton Pad", Money::from_cents(299), 5))
            .await
            .unwrap();
        repo.insert(&ProductDraft::new("USB_Cable", Money::from_cents(450), 7))
            .await
            .unwrap();

        // "%" and "_" are LIKE wildcards; as needles they must match only
        // names containing them literally.
        let percent = repo.find_by_name_containing("%").await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].name, "100% Cotton Pad");

        let underscore = repo.find_by_name_containing("_").await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].name, "USB_Cable");

        assert!(repo.find_by_name_containing("100%C").await.unwrap().is_empty());
        assert!(repo.find_by_name_containing("\\").await.unwrap().is_empty());
    }

    #[test]
    fn escape_like_escapes_metacharacters_only() {
        assert_eq!(escape_like("100% up_time\\"), "100\\% up\\_time\\\\");
        assert_eq!(escape_like("plain needle"), "plain needle");
        assert_eq!(escape_like(""), "");
    }

    #[tokio::test]
    async fn stock_filter_is_strictly_greater() {
        let repo = repo().await;
        repo.insert(&pen()).await.unwrap(); // stock 10

        assert_eq!(repo.find_by_stock_above(5).await.unwrap().len(), 1);
        assert!(repo.find_by_stock_above(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_mutable_field() {
        let repo = repo().await;
        let created = repo.insert(&pen()).await.unwrap();

        let updated = repo
            .update(created.id, &ProductDraft::new("Gel Pen", Money::from_cents(200), 0))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Gel Pen");
        // The draft carried no description, so the stored one is gone:
        // full overwrite, not a merge.
        assert_eq!(updated.description, None);
        assert_eq!(updated.price_cents, 200);
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.created_at, created.created_at);

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_missing_id_fails_not_found() {
        let repo = repo().await;
        let err = repo.update(42, &pen()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn delete_removes_row_and_missing_id_fails() {
        let repo = repo().await;
        let created = repo.insert(&pen()).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_all_empties_the_table() {
        let repo = repo().await;
        repo.insert(&pen()).await.unwrap();
        repo.insert(&ProductDraft::new("Notebook", Money::from_cents(500), 4))
            .await
            .unwrap();

        let removed = repo.delete_all().await.unwrap();
        assert_eq!(removed, 2);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
