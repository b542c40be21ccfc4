//! Custom actions for the Product actor.
//!
//! These actions are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on [`StockProduct`](crate::model::StockProduct).

/// Custom actions for product entities, beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
}
