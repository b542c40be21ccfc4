//! # Product Client
//!
//! Provides a high-level API for the `Product` actor and implements the
//! [`ProductStockLookup`] port with batch requests.
use super::map_framework_error;
use crate::model::{ProductCreate, ProductId, ProductUpdate, StockAdjustment, StockProduct};
use crate::ports::{ProductStockLookup, StoreError};
use crate::product_actor::{ProductAction, ProductActionResult};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone, Debug)]
pub struct ProductClient {
    inner: ResourceClient<StockProduct>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<StockProduct>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<StockProduct, StoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_framework_error)
    }

    /// Changes price and/or quantity of one product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<StockProduct, StoreError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(map_framework_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, StoreError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(map_framework_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
        }
    }
}

#[async_trait]
impl ActorClient<StockProduct> for ProductClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<StockProduct> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e)
    }
}

#[async_trait]
impl ProductStockLookup for ProductClient {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<StockProduct>, StoreError> {
        debug!("Sending request");
        self.inner
            .get_many(ids.to_vec())
            .await
            .map_err(map_framework_error)
    }

    /// Sent as a single `update_many`, so the product actor applies every
    /// adjustment or none. An empty list sends nothing.
    #[instrument(skip(self, adjustments), fields(count = adjustments.len()))]
    async fn apply_deltas(&self, adjustments: &[StockAdjustment]) -> Result<(), StoreError> {
        if adjustments.is_empty() {
            return Ok(());
        }
        debug!(?adjustments, "Writing back stock");
        let updates = adjustments
            .iter()
            .map(|adjustment| (adjustment.product_id, ProductUpdate::from(*adjustment)))
            .collect();
        self.inner
            .update_many(updates)
            .await
            .map(|_| ())
            .map_err(map_framework_error)
    }
}
