//! # Product Repository
//!
//! Database operations for the garment catalog.
//!
//! Products are snapshot-priced: sale lines copy `price_cents` at sale time,
//! so later catalog edits never rewrite history.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::Product;

const PRODUCT_COLUMNS: &str = r#"
    id, name, description, price_cents, brand,
    gender, garment_type, size, season, style, material, usage
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Lists products of a brand, ordered by name.
    pub async fn list_by_brand(&self, brand: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE brand = ?1 ORDER BY name"
        ))
        .bind(brand)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a new product.
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, price_cents, brand,
                gender, garment_type, size, season, style, material, usage
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8, ?9, ?10, ?11, ?12
            )
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(&product.brand)
        .bind(product.gender)
        .bind(product.garment_type)
        .bind(product.size)
        .bind(product.season)
        .bind(product.style)
        .bind(product.material)
        .bind(product.usage)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing product.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                brand = ?5,
                gender = ?6,
                garment_type = ?7,
                size = ?8,
                season = ?9,
                style = ?10,
                material = ?11,
                usage = ?12
            WHERE id = ?1
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(&product.brand)
        .bind(product.gender)
        .bind(product.garment_type)
        .bind(product.size)
        .bind(product.season)
        .bind(product.style)
        .bind(product.material)
        .bind(product.usage)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use boutique_core::{GarmentType, Gender, Material, Season, Size, Style, Usage};

    fn sample_product() -> Product {
        Product {
            id: generate_product_id(),
            name: "Vestido Rojo".to_string(),
            description: Some("Vestido de noche".to_string()),
            price_cents: 2999,
            brand: "Zara".to_string(),
            gender: Gender::Womens,
            garment_type: GarmentType::Dress,
            size: Some(Size::M),
            season: Some(Season::Summer),
            style: Some(Style::Formal),
            material: Material::Cotton,
            usage: Usage::Occasion,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = sample_product();

        db.products().insert(&product).await.unwrap();

        let loaded = db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Vestido Rojo");
        assert_eq!(loaded.price_cents, 2999);
        assert_eq!(loaded.gender, Gender::Womens);
        assert_eq!(loaded.size, Some(Size::M));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.products().get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.products().update(&sample_product()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_ordered_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut b = sample_product();
        b.name = "Blusa Azul".to_string();
        let mut a = sample_product();
        a.name = "Abrigo Gris".to_string();

        db.products().insert(&b).await.unwrap();
        db.products().insert(&a).await.unwrap();

        let listed = db.products().list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Abrigo Gris");
        assert_eq!(listed[1].name, "Blusa Azul");
    }
}
