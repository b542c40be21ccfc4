use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    /// Generates a fresh, time-ordered id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A customer who can place orders.
///
/// The order workflow only cares that a customer exists; name and email are
/// carried for the rest of the application.
///
/// See [`impl ActorEntity for Customer`](#impl-ActorEntity-for-Customer) for details on:
/// - Creation parameters ([`CustomerCreate`])
/// - Update parameters ([`CustomerUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for creating a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
