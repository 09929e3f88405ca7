//! Grocery Types - Pure type definitions for the Shopping Helper backend
//!
//! This crate contains only the domain records and the request contracts
//! exchanged over HTTP. It has no async runtime or database dependencies.

pub mod patch;
pub mod price;
pub mod product;
pub mod store;

pub use price::*;
pub use product::*;
pub use store::*;

/// Entity kinds, used in error details and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Store,
    Product,
    Price,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Store => write!(f, "Store"),
            Entity::Product => write!(f, "Product"),
            Entity::Price => write!(f, "Price"),
        }
    }
}
