use super::{LifecycleError, SystemConfig};
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::workflow::OrderCreationWorkflow;
use crate::{customer_actor, order_actor, product_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The placement workflow as wired by [`OrderSystem`].
pub type SystemWorkflow = OrderCreationWorkflow<CustomerClient, ProductClient, OrderClient>;

/// Runs the customer, product and order actors and hands out their clients.
///
/// The actors have no dependencies on each other; the only place they meet
/// is the [`OrderCreationWorkflow`] returned by [`workflow`](Self::workflow).
///
/// ```rust,ignore
/// let system = OrderSystem::new();
///
/// let customer = system.customer_client.create_customer(params).await?;
/// let order = system.workflow().execute(customer.id, &lines).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        info!(channel_capacity = config.channel_capacity, "Starting order system");

        let (customer_actor, customer_client) = customer_actor::new(config.channel_capacity);
        let (product_actor, product_client) = product_actor::new(config.channel_capacity);
        let (order_actor, order_client) = order_actor::new(config.channel_capacity);

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        Self {
            customer_client: CustomerClient::new(customer_client),
            product_client: ProductClient::new(product_client),
            order_client: OrderClient::new(order_client),
            handles,
        }
    }

    /// A workflow over clones of this system's clients.
    ///
    /// The clones keep the actors alive: drop every workflow before awaiting
    /// [`shutdown`](Self::shutdown), or it will not return.
    pub fn workflow(&self) -> SystemWorkflow {
        OrderCreationWorkflow::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Closes the clients' channels and waits for every actor to drain its
    /// mailbox and exit.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down order system");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        join_all(self.handles).await?;

        info!("Order system shutdown complete");
        Ok(())
    }
}

/// Awaits every handle, even after one has failed, and reports the first failure.
async fn join_all(handles: Vec<JoinHandle<()>>) -> Result<(), LifecycleError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Actor task failed");
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_all_waits_for_tasks_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let handles = vec![
            tokio::spawn(async { panic!("actor crashed") }),
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                flag.store(true, Ordering::SeqCst);
            }),
        ];

        let result = join_all(handles).await;

        assert!(matches!(
            result,
            Err(LifecycleError::TaskFailed(ref e)) if e.is_panic()
        ));
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_shutdown_after_clean_run() {
        let system = OrderSystem::new();
        assert!(system.shutdown().await.is_ok());
    }
}
