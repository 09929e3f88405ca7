//! HTTP handlers

pub mod health;
pub mod prices;
pub mod products;
pub mod stores;

pub use health::{health, root};
