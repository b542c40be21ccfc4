//! # Order Creation Workflow
//!
//! Places an order: checks the customer, prices every requested line from the
//! current stock, stores the order and writes the remaining quantities back.
//!
//! ## Flow
//!
//! 1. `CustomerLookup::find_by_id` - missing customer fails with `CustomerNotFound`
//! 2. `ProductStockLookup::find_all_by_id` - one batch read for the distinct product ids
//! 3. per line, in request order: `ProductNotFound`, then `InsufficientStock`,
//!    otherwise a line item priced from the snapshot and a stock adjustment
//! 4. `OrderStore::create`
//! 5. `ProductStockLookup::apply_deltas`
//!
//! Nothing is written unless steps 1-3 succeed. Steps 4 and 5 are separate
//! calls: when 5 fails the stored order is discarded again and the write-back
//! error is returned as is.
//!
//! Lines naming the same product are each checked against the same snapshot.
//! Their quantities are not summed, and the last adjustment for that product
//! wins.
//!
//! Nothing here serializes concurrent placements: two requests may read the
//! same stock level and both succeed.

pub mod error;

pub use error::*;

use crate::model::{
    CreateOrderRequest, CustomerId, Order, OrderLineItem, OrderLineRequest, ProductId,
    StockAdjustment, StockProduct,
};
use crate::ports::{CustomerLookup, OrderStore, ProductStockLookup};
use std::collections::{HashMap, HashSet};
use tracing::{debug, error, info, instrument, warn};

/// Order placement over three injected collaborators.
///
/// ```rust,ignore
/// let workflow = OrderCreationWorkflow::new(customer_client, product_client, order_client);
/// let order = workflow.execute(customer_id, &[OrderLineRequest::new(product_id, 2)]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderCreationWorkflow<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderCreationWorkflow<C, P, O>
where
    C: CustomerLookup,
    P: ProductStockLookup,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order for `customer_id` with the requested `lines`.
    ///
    /// Returns the stored order, whose line items mirror `lines` in order.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        lines: &[OrderLineRequest],
    ) -> Result<Order, CreateOrderError> {
        debug!(?lines, "execute called");

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(CreateOrderError::CustomerNotFound(customer_id))
            .inspect_err(|e| warn!(error = %e, "Order rejected"))?;

        let ids = distinct_product_ids(lines);
        let stock = self.products.find_all_by_id(&ids).await?;

        let (items, adjustments) =
            price_lines(lines, &stock).inspect_err(|e| warn!(error = %e, "Order rejected"))?;

        let order = self.orders.create(&customer, items).await?;

        if let Err(e) = self.products.apply_deltas(&adjustments).await {
            warn!(order_id = %order.id, error = %e, "Stock write-back failed, discarding order");
            if let Err(discard_error) = self.orders.discard(order.id).await {
                error!(order_id = %order.id, error = %discard_error, "Could not discard order");
            }
            return Err(e.into());
        }

        info!(order_id = %order.id, total = ?order.total(), "Order placed");
        Ok(order)
    }

    /// [`execute`](Self::execute) for a decoded request body.
    pub async fn execute_request(
        &self,
        request: CreateOrderRequest,
    ) -> Result<Order, CreateOrderError> {
        self.execute(request.customer_id, &request.products).await
    }
}

/// Product ids of `lines` without repeats, in first-seen order.
fn distinct_product_ids(lines: &[OrderLineRequest]) -> Vec<ProductId> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .iter()
        .map(|line| line.product_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Validates each line against the stock snapshot and computes the line
/// items and the remaining quantities. Stops at the first failing line.
fn price_lines(
    lines: &[OrderLineRequest],
    stock: &[StockProduct],
) -> Result<(Vec<OrderLineItem>, Vec<StockAdjustment>), CreateOrderError> {
    let by_id: HashMap<ProductId, &StockProduct> =
        stock.iter().map(|product| (product.id, product)).collect();

    let mut items = Vec::with_capacity(lines.len());
    let mut adjustments = Vec::with_capacity(lines.len());

    for line in lines {
        let product = by_id
            .get(&line.product_id)
            .ok_or(CreateOrderError::ProductNotFound(line.product_id))?;

        if product.quantity < line.quantity {
            debug!(
                product_id = %line.product_id,
                requested = line.quantity,
                available = product.quantity,
                "Insufficient stock"
            );
            return Err(CreateOrderError::InsufficientStock {
                product_id: line.product_id,
                requested: line.quantity,
                available: product.quantity,
            });
        }

        adjustments.push(StockAdjustment {
            product_id: product.id,
            quantity: product.quantity - line.quantity,
        });
        items.push(OrderLineItem {
            product_id: line.product_id,
            quantity: line.quantity,
            price: product.price,
        });
    }

    Ok((items, adjustments))
}
