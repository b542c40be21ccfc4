//! Orders and their line items.
//!
//! An [`Order`] is written once by the order actor and never mutated
//! afterwards: its line items are private and only readable through
//! [`Order::items`], and the order entity rejects every update.
use crate::model::{CustomerId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generates a fresh, time-ordered id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested product in an incoming order. Input only, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Body of an order placement request:
/// `{"customer_id": "..", "products": [{"id": "..", "quantity": 2}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<OrderLineRequest>,
}

/// What was ordered and at which unit price.
///
/// `price` is copied from the stock record when the order is placed and is
/// never recomputed, so old orders keep their historical prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLineItem {
    /// `price * quantity` for this line, or `None` if it does not fit a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub ordered_at: DateTime<Utc>,
    items: Vec<OrderLineItem>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally generated by the order actor)
    /// * `customer_id` - Customer placing the order
    /// * `ordered_at` - When the order was stored
    /// * `items` - Line items in the order they were requested
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        ordered_at: DateTime<Utc>,
        items: Vec<OrderLineItem>,
    ) -> Self {
        Self {
            id,
            customer_id,
            ordered_at,
            items,
        }
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    /// Sum of the line subtotals, from the captured prices.
    ///
    /// `None` when a subtotal or the running sum overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.subtotal()?)
        })
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub items: Vec<OrderLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: Decimal, quantity: u32) -> OrderLineItem {
        OrderLineItem {
            product_id: ProductId::new(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_total_sums_captured_prices() {
        let order = Order::new(
            OrderId::new(),
            CustomerId::new(),
            Utc::now(),
            vec![line(Decimal::new(1000, 2), 2), line(Decimal::new(250, 2), 1)],
        );
        assert_eq!(order.items()[0].subtotal(), Some(Decimal::new(2000, 2)));
        assert_eq!(order.total(), Some(Decimal::new(2250, 2)));
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new(OrderId::new(), CustomerId::new(), Utc::now(), Vec::new());
        assert!(order.items().is_empty());
        assert_eq!(order.total(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let order = Order::new(
            OrderId::new(),
            CustomerId::new(),
            Utc::now(),
            vec![line(Decimal::MAX, 2)],
        );
        assert_eq!(order.items()[0].subtotal(), None);
        assert_eq!(order.total(), None);

        let order = Order::new(
            OrderId::new(),
            CustomerId::new(),
            Utc::now(),
            vec![line(Decimal::MAX, 1), line(Decimal::MAX, 1)],
        );
        assert_eq!(order.items()[0].subtotal(), Some(Decimal::MAX));
        assert_eq!(order.total(), None);
    }

    #[test]
    fn test_create_order_request_body_shape() {
        let customer = Uuid::now_v7();
        let product = Uuid::now_v7();
        let body = format!(
            r#"{{"customer_id":"{customer}","products":[{{"id":"{product}","quantity":3}}]}}"#
        );

        let request: CreateOrderRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(request.customer_id, CustomerId(customer));
        assert_eq!(
            request.products,
            vec![OrderLineRequest::new(ProductId(product), 3)]
        );
    }

    #[test]
    fn test_ids_display_with_resource_prefix() {
        let id = OrderId::new();
        assert_eq!(id.to_string(), format!("order_{}", id.0));
    }
}
