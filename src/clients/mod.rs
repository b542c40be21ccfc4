//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client hides the message passing of its actor and implements the
//! matching collaborator port from [`crate::ports`], which is how the order
//! workflow reaches the actors.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;

use crate::ports::StoreError;
use actor_framework::FrameworkError;

/// Maps actor plumbing failures onto the port error type.
pub(crate) fn map_framework_error(e: FrameworkError) -> StoreError {
    match e {
        FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
            StoreError::Unavailable(e.to_string())
        }
        FrameworkError::NotFound(id) => StoreError::NotFound(id),
        FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_actor::ProductError;
    use rust_decimal::Decimal;

    #[test]
    fn test_framework_errors_map_to_store_errors() {
        assert!(matches!(
            map_framework_error(FrameworkError::ActorClosed),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_framework_error(FrameworkError::ActorDropped),
            StoreError::Unavailable(_)
        ));
        assert_eq!(
            map_framework_error(FrameworkError::NotFound("product_1".to_string())),
            StoreError::NotFound("product_1".to_string())
        );

        let rejected = ProductError::InvalidPrice(Decimal::NEGATIVE_ONE);
        let expected = rejected.to_string();
        assert_eq!(
            map_framework_error(FrameworkError::EntityError(Box::new(rejected))),
            StoreError::Rejected(expected)
        );
    }
}
