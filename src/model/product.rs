//! Stock records: what a product costs right now and how many are on hand.
//!
//! # Actor Framework
//! [`StockProduct`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`crate::product_actor`] for details on:
//! - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generates a fresh, time-ordered id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// The authoritative stock snapshot of one product at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl StockProduct {
    /// Creates a new StockProduct instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally generated by the product actor)
    /// * `name` - Product name
    /// * `price` - Current unit price
    /// * `quantity` - Available stock quantity
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Payload for updating a product's price and/or quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

/// The remaining quantity to write back for a product after an order:
/// `old quantity - requested quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<StockAdjustment> for ProductUpdate {
    fn from(adjustment: StockAdjustment) -> Self {
        Self {
            price: None,
            quantity: Some(adjustment.quantity),
        }
    }
}
