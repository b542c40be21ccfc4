//! [`ActorEntity`] implementation for [`StockProduct`].
//!
//! Quantity write-backs from the order workflow arrive as [`ProductUpdate`]s
//! with only `quantity` set; they overwrite the stored quantity rather than
//! subtracting from it.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{ProductCreate, ProductId, ProductUpdate, StockProduct};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for StockProduct {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let price = validate_price(params.price)?;
        Ok(Self::new(id, params.name, price, params.quantity))
    }

    /// # Fields Updated
    /// - `price`: unit price, must not be negative
    /// - `quantity`: available stock, replaced as given
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = validate_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> StockProduct {
        StockProduct::new(ProductId::new(), "Widget", Decimal::new(1000, 2), 5)
    }

    #[test]
    fn test_negative_price_is_rejected_on_create() {
        let result = StockProduct::from_create_params(
            ProductId::new(),
            ProductCreate {
                name: "Broken".to_string(),
                price: Decimal::new(-1, 2),
                quantity: 1,
            },
        );
        assert_eq!(result, Err(ProductError::InvalidPrice(Decimal::new(-1, 2))));
    }

    #[tokio::test]
    async fn test_quantity_update_overwrites_stock() {
        let mut product = widget();
        let adjustment = crate::model::StockAdjustment {
            product_id: product.id,
            quantity: 3,
        };
        product
            .on_update(ProductUpdate::from(adjustment), &())
            .await
            .unwrap();
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, Decimal::new(1000, 2));
    }

    #[tokio::test]
    async fn test_check_stock_reports_quantity() {
        let mut product = widget();
        let result = product.handle_action(ProductAction::CheckStock, &()).await;
        assert_eq!(result, Ok(ProductActionResult::CheckStock(5)));
    }
}
