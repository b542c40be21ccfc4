//! # Customer Client
//!
//! High-level API for the `Customer` actor, and the [`CustomerLookup`] port
//! the order workflow uses.
use super::map_framework_error;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use crate::ports::{CustomerLookup, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone, Debug)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, StoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(map_framework_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, StoreError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(map_framework_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e)
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, expect_get, MockClient};

    #[tokio::test]
    async fn test_find_by_id_treats_absence_as_none() {
        let id = CustomerId::new();
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(id).return_ok(None);

        let client = CustomerClient::new(mock.client());
        assert_eq!(client.find_by_id(id).await, Ok(None));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_unavailable() {
        let id = CustomerId::new();
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(id).return_err(FrameworkError::ActorClosed);

        let client = CustomerClient::new(mock.client());
        let result = client.find_by_id(id).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_asks_for_that_customer() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customer_client = CustomerClient::new(client);
        let alice = Customer::new(CustomerId::new(), "Alice", "alice@example.com");
        let id = alice.id;

        let task = tokio::spawn(async move { customer_client.find_by_id(id).await });

        let (requested, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(requested, id);
        responder.send(Ok(Some(alice.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(alice)));
    }

    #[tokio::test]
    async fn test_create_customer_sends_params() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customer_client = CustomerClient::new(client);

        let task = tokio::spawn(async move {
            customer_client
                .create_customer(CustomerCreate {
                    name: "Bob".to_string(),
                    email: "bob@example.com".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Bob");
        let created = Customer::new(CustomerId::new(), params.name, params.email);
        responder.send(Ok(created.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(created));
    }
}
