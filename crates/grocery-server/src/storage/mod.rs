//! Storage layer
//!
//! Uses SQLite (embedded). Every request works through its own
//! [`DbSession`], which owns one pooled connection until it is dropped.

pub mod db;
pub mod error;
pub mod prices;
pub mod products;
pub mod session;
pub mod stores;

pub use db::Database;
pub use error::StorageError;
pub use session::DbSession;
