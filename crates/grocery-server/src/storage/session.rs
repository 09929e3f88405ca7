//! Request-scoped database session

use sqlx::pool::PoolConnection;
use sqlx::{Connection, Sqlite, Transaction};

/// One pooled connection, held for the duration of a single request.
///
/// Writes run inside a transaction on this connection and are committed
/// explicitly; a transaction dropped before commit is rolled back. Dropping
/// the session returns the connection to the pool on every exit path.
pub struct DbSession {
    pub(super) conn: PoolConnection<Sqlite>,
}

impl DbSession {
    pub(super) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    /// Starts a write transaction that holds the database write lock from
    /// its first statement. Reads inside it never see a stale WAL snapshot.
    pub(super) async fn begin_write(&mut self) -> sqlx::Result<Transaction<'_, Sqlite>> {
        self.conn.begin_with("BEGIN IMMEDIATE").await
    }
}
