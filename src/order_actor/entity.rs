//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor only stores what the workflow hands it. The id and the
//! `ordered_at` timestamp are assigned here, at creation.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.customer_id, Utc::now(), params.items))
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Err(OrderError::Immutable(self.id))
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
