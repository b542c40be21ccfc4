//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// # Fields Updated
    /// - `name`: must stay non-empty
    /// - `email`
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Customer::from_create_params(
            CustomerId::new(),
            CustomerCreate {
                name: "  ".to_string(),
                email: "nobody@example.com".to_string(),
            },
        );
        assert!(matches!(result, Err(CustomerError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_unset_fields() {
        let mut customer = Customer::new(CustomerId::new(), "Alice", "alice@example.com");
        customer
            .on_update(
                CustomerUpdate {
                    email: Some("alice@example.org".to_string()),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.email, "alice@example.org");
    }
}
