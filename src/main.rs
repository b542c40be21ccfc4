//! Demo: stocks two products, places one order that fits and one that does
//! not, then shuts down.

use order_placement::lifecycle::tracing::setup_tracing;
use order_placement::lifecycle::{OrderSystem, SystemConfig};
use order_placement::model::{CustomerCreate, OrderLineRequest, ProductCreate};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    let system = OrderSystem::with_config(config);

    let customer = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .instrument(tracing::info_span!("customer_creation"))
        .await?;
    info!(customer_id = %customer.id, "Customer created");

    let widget = system
        .product_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: Decimal::new(1000, 2),
            quantity: 5,
        })
        .await?;
    let gadget = system
        .product_client
        .create_product(ProductCreate {
            name: "Gadget".to_string(),
            price: Decimal::new(250, 2),
            quantity: 1,
        })
        .await?;
    info!(widget = %widget.id, gadget = %gadget.id, "Products stocked");

    let workflow = system.workflow();

    let lines = [
        OrderLineRequest::new(widget.id, 2),
        OrderLineRequest::new(gadget.id, 1),
    ];
    match workflow
        .execute(customer.id, &lines)
        .instrument(tracing::info_span!("order_processing"))
        .await
    {
        Ok(order) => info!(order_id = %order.id, total = ?order.total(), "Order processed"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    // Gadget is now sold out
    let lines = [OrderLineRequest::new(gadget.id, 1)];
    match workflow
        .execute(customer.id, &lines)
        .instrument(tracing::info_span!("order_processing"))
        .await
    {
        Ok(order) => info!(order_id = %order.id, "Order processed"),
        Err(e) => info!(error = %e, validation = e.is_validation(), "Order refused"),
    }

    let remaining = system.product_client.check_stock(widget.id).await?;
    info!(product_id = %widget.id, remaining, "Stock after orders");

    drop(workflow);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
