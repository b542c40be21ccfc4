//! # Order Client
//!
//! Provides a high-level API for the `Order` actor and implements the
//! [`OrderStore`] port.
use super::map_framework_error;
use crate::model::{Customer, Order, OrderCreate, OrderId, OrderLineItem};
use crate::ports::{OrderStore, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e)
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(
        skip(self, customer, items),
        fields(customer_id = %customer.id, items = items.len())
    )]
    async fn create(
        &self,
        customer: &Customer,
        items: Vec<OrderLineItem>,
    ) -> Result<Order, StoreError> {
        debug!(?items, "create_order called");
        let params = OrderCreate {
            customer_id: customer.id,
            items,
        };
        self.inner.create(params).await.map_err(map_framework_error)
    }

    async fn discard(&self, id: OrderId) -> Result<(), StoreError> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, ProductId};
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_create_sends_customer_and_items() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);
        let customer = Customer::new(CustomerId::new(), "Alice", "alice@example.com");
        let items = vec![OrderLineItem {
            product_id: ProductId::new(),
            quantity: 2,
            price: Decimal::new(1000, 2),
        }];

        let task = {
            let customer = customer.clone();
            let items = items.clone();
            tokio::spawn(async move { order_client.create(&customer, items).await })
        };

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.customer_id, customer.id);
        assert_eq!(params.items, items);

        let stored = Order::new(OrderId::new(), params.customer_id, Utc::now(), params.items);
        responder.send(Ok(stored.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(stored));
    }

    #[tokio::test]
    async fn test_discard_deletes_the_order() {
        let id = OrderId::new();
        let mut mock = MockClient::<Order>::new();
        mock.expect_delete(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        let client = OrderClient::new(mock.client());
        assert_eq!(
            client.discard(id).await,
            Err(StoreError::NotFound(id.to_string()))
        );
        mock.verify();
    }
}
