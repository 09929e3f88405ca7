//! Product persistence

use super::error::{Result, StorageError};
use super::prices::{referencing_prices, Parent};
use super::session::DbSession;
use grocery_types::{Entity, Product, ProductCreate, ProductUpdate};
use sqlx::SqliteConnection;

impl DbSession {
    pub async fn create_product(&mut self, req: &ProductCreate) -> Result<Product> {
        let mut tx = self.begin_write().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO products (name, brand, category, unit, size)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&req.name)
        .bind(&req.brand)
        .bind(&req.category)
        .bind(&req.unit)
        .bind(req.size)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        self.get_product(id)
            .await?
            .ok_or(StorageError::Vanished { entity: Entity::Product, id })
    }

    pub async fn list_products(&mut self) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, brand, category, unit, size
            FROM products ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_product(&mut self, id: i64) -> Result<Option<Product>> {
        Ok(fetch_product(&mut self.conn, id).await?)
    }

    pub async fn update_product(
        &mut self,
        id: i64,
        update: ProductUpdate,
    ) -> Result<Option<Product>> {
        let mut tx = self.begin_write().await?;

        let Some(mut product) = fetch_product(&mut tx, id).await? else {
            return Ok(None);
        };
        product.apply(update);

        sqlx::query(
            r#"
            UPDATE products SET name = ?1, brand = ?2, category = ?3, unit = ?4, size = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&product.name)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(&product.unit)
        .bind(product.size)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_product(id).await
    }

    /// Returns `false` if no such product exists.
    pub async fn delete_product(&mut self, id: i64) -> Result<bool> {
        let mut tx = self.begin_write().await?;

        if fetch_product(&mut tx, id).await?.is_none() {
            return Ok(false);
        }
        if referencing_prices(&mut tx, Parent::Product, id).await? > 0 {
            return Err(StorageError::StillReferenced { entity: Entity::Product, id });
        }

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }
}

async fn fetch_product(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(
        r#"
        SELECT id, name, brand, category, unit, size
        FROM products WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    brand: Option<String>,
    category: String,
    unit: Option<String>,
    size: Option<f64>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            category: r.category,
            brand: r.brand,
            unit: r.unit,
            size: r.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::Database;
    use grocery_types::{ProductCreate, ProductUpdate};

    #[tokio::test]
    async fn test_update_clears_nullable_fields_only() {
        let db = Database::in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();

        let created = session
            .create_product(&ProductCreate {
                name: "Flour".to_string(),
                category: "Baking".to_string(),
                brand: Some("Acme".to_string()),
                unit: Some("g".to_string()),
                size: Some(500.0),
            })
            .await
            .unwrap();

        let update = ProductUpdate {
            brand: Some(None),
            size: Some(Some(1000.0)),
            ..Default::default()
        };
        let updated = session
            .update_product(created.id, update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.brand, None);
        assert_eq!(updated.size, Some(1000.0));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.unit, created.unit);
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let db = Database::in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();

        for name in ["Milk", "Bread", "Eggs"] {
            session
                .create_product(&ProductCreate::new(name, "Basics"))
                .await
                .unwrap();
        }

        let names: Vec<String> = session
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Milk", "Bread", "Eggs"]);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let db = Database::in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();

        assert!(!session.delete_product(5).await.unwrap());
    }
}
