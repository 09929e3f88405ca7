//! Store persistence

use super::error::{Result, StorageError};
use super::prices::{referencing_prices, Parent};
use super::session::DbSession;
use grocery_types::{Entity, Store, StoreCreate, StoreUpdate};
use sqlx::SqliteConnection;

impl DbSession {
    pub async fn create_store(&mut self, req: &StoreCreate) -> Result<Store> {
        let mut tx = self.begin_write().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO stores (name, latitude, longitude, address)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&req.name)
        .bind(req.latitude)
        .bind(req.longitude)
        .bind(&req.address)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        self.get_store(id)
            .await?
            .ok_or(StorageError::Vanished { entity: Entity::Store, id })
    }

    pub async fn list_stores(&mut self) -> Result<Vec<Store>> {
        let rows: Vec<StoreRow> = sqlx::query_as(
            r#"
            SELECT id, name, latitude, longitude, address
            FROM stores ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_store(&mut self, id: i64) -> Result<Option<Store>> {
        Ok(fetch_store(&mut self.conn, id).await?)
    }

    pub async fn update_store(&mut self, id: i64, update: StoreUpdate) -> Result<Option<Store>> {
        let mut tx = self.begin_write().await?;

        let Some(mut store) = fetch_store(&mut tx, id).await? else {
            return Ok(None);
        };
        store.apply(update);

        sqlx::query(
            r#"
            UPDATE stores SET name = ?1, latitude = ?2, longitude = ?3, address = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&store.name)
        .bind(store.latitude)
        .bind(store.longitude)
        .bind(&store.address)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_store(id).await
    }

    /// Returns `false` if no such store exists.
    pub async fn delete_store(&mut self, id: i64) -> Result<bool> {
        let mut tx = self.begin_write().await?;

        if fetch_store(&mut tx, id).await?.is_none() {
            return Ok(false);
        }
        if referencing_prices(&mut tx, Parent::Store, id).await? > 0 {
            return Err(StorageError::StillReferenced { entity: Entity::Store, id });
        }

        sqlx::query("DELETE FROM stores WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }

    pub async fn count_stores(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

async fn fetch_store(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Store>> {
    let row: Option<StoreRow> = sqlx::query_as(
        r#"
        SELECT id, name, latitude, longitude, address
        FROM stores WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

#[derive(sqlx::FromRow)]
struct StoreRow {
    id: i64,
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    address: Option<String>,
}

impl From<StoreRow> for Store {
    fn from(r: StoreRow) -> Self {
        Store {
            id: r.id,
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
            address: r.address,
        }
    }
}
