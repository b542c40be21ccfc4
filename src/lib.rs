//! # Order Placement
//!
//! Places customer orders against a product catalogue with tracked stock.
//! Customers, products and orders each live in a resource actor built on
//! [`actor_framework`]; the [`workflow`] ties them together through small
//! collaborator traits so it can be tested without any actors at all.
//!
//! ## Module Tour
//!
//! ### 1. The Workflow ([`workflow`], [`ports`])
//! [`OrderCreationWorkflow`](workflow::OrderCreationWorkflow) validates a
//! request against a single stock snapshot, stores the order with the prices
//! it saw, and writes the remaining quantities back. It only talks to the
//! [`CustomerLookup`](ports::CustomerLookup),
//! [`ProductStockLookup`](ports::ProductStockLookup) and
//! [`OrderStore`](ports::OrderStore) traits.
//!
//! ### 2. The Interface ([`clients`])
//! Typed wrappers around `ResourceClient<T>` that implement the ports.
//! Framework failures surface as [`StoreError`](ports::StoreError).
//!
//! ### 3. The Actors ([`customer_actor`], [`product_actor`], [`order_actor`])
//! `ActorEntity` implementations over the types in [`model`]. Orders are
//! immutable once stored.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns the actors, hands out
//! clients and a ready-wired workflow, and shuts everything down.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_SYSTEM_CHANNEL_CAPACITY=8 RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod ports;
pub mod product_actor;
pub mod workflow;
