//! Price persistence
//!
//! Prices reference a store and a product. Both references are checked inside
//! the write transaction, so a price never points at a missing parent.

use super::error::{Result, StorageError};
use super::session::DbSession;
use chrono::{DateTime, Utc};
use grocery_types::{Entity, Price, PriceCreate, PriceUpdate};
use sqlx::SqliteConnection;

impl DbSession {
    pub async fn create_price(&mut self, req: &PriceCreate) -> Result<Price> {
        let mut tx = self.begin_write().await?;

        ensure_exists(&mut tx, Parent::Store, req.store_id).await?;
        ensure_exists(&mut tx, Parent::Product, req.product_id).await?;

        let id = sqlx::query(
            r#"
            INSERT INTO prices (store_id, product_id, price, last_updated)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(req.store_id)
        .bind(req.product_id)
        .bind(req.price)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        self.get_price(id)
            .await?
            .ok_or(StorageError::Vanished { entity: Entity::Price, id })
    }

    pub async fn list_prices(&mut self) -> Result<Vec<Price>> {
        let rows: Vec<PriceRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, product_id, price, last_updated
            FROM prices ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_price(&mut self, id: i64) -> Result<Option<Price>> {
        Ok(fetch_price(&mut self.conn, id).await?)
    }

    /// Leaves `last_updated` at its creation value.
    pub async fn update_price(&mut self, id: i64, update: PriceUpdate) -> Result<Option<Price>> {
        let mut tx = self.begin_write().await?;

        let Some(mut price) = fetch_price(&mut tx, id).await? else {
            return Ok(None);
        };
        if let Some(store_id) = update.store_id {
            ensure_exists(&mut tx, Parent::Store, store_id).await?;
        }
        if let Some(product_id) = update.product_id {
            ensure_exists(&mut tx, Parent::Product, product_id).await?;
        }
        price.apply(update);

        sqlx::query(
            r#"
            UPDATE prices SET store_id = ?1, product_id = ?2, price = ?3
            WHERE id = ?4
            "#,
        )
        .bind(price.store_id)
        .bind(price.product_id)
        .bind(price.price)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_price(id).await
    }

    /// Returns `false` if no such price exists.
    pub async fn delete_price(&mut self, id: i64) -> Result<bool> {
        let mut tx = self.begin_write().await?;

        let deleted = sqlx::query("DELETE FROM prices WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(deleted > 0)
    }
}

/// The rows a price points at.
#[derive(Debug, Clone, Copy)]
pub(super) enum Parent {
    Store,
    Product,
}

impl Parent {
    fn entity(self) -> Entity {
        match self {
            Parent::Store => Entity::Store,
            Parent::Product => Entity::Product,
        }
    }
}

/// Number of prices pointing at the given store or product.
pub(super) async fn referencing_prices(
    conn: &mut SqliteConnection,
    parent: Parent,
    id: i64,
) -> sqlx::Result<i64> {
    let sql = match parent {
        Parent::Store => "SELECT COUNT(*) FROM prices WHERE store_id = ?1",
        Parent::Product => "SELECT COUNT(*) FROM prices WHERE product_id = ?1",
    };

    sqlx::query_scalar(sql).bind(id).fetch_one(conn).await
}

async fn ensure_exists(conn: &mut SqliteConnection, parent: Parent, id: i64) -> Result<()> {
    let sql = match parent {
        Parent::Store => "SELECT COUNT(*) FROM stores WHERE id = ?1",
        Parent::Product => "SELECT COUNT(*) FROM products WHERE id = ?1",
    };

    let found: i64 = sqlx::query_scalar(sql).bind(id).fetch_one(conn).await?;
    if found == 0 {
        return Err(StorageError::MissingReference {
            entity: parent.entity(),
            id,
        });
    }

    Ok(())
}

async fn fetch_price(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Price>> {
    let row: Option<PriceRow> = sqlx::query_as(
        r#"
        SELECT id, store_id, product_id, price, last_updated
        FROM prices WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

#[derive(sqlx::FromRow)]
struct PriceRow {
    id: i64,
    store_id: i64,
    product_id: i64,
    price: f64,
    last_updated: DateTime<Utc>,
}

impl From<PriceRow> for Price {
    fn from(r: PriceRow) -> Self {
        Price {
            id: r.id,
            store_id: r.store_id,
            product_id: r.product_id,
            price: r.price,
            last_updated: r.last_updated,
        }
    }
}
