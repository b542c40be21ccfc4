//! # Logging setup
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//! Module paths are hidden; log lines carry structured fields instead
//! (`customer_id`, `product_id`, `order_id`, `requested`, `available`).
//!
//! ```bash
//! RUST_LOG=info cargo run     # placements and actor lifecycle
//! RUST_LOG=debug cargo run    # full payloads at every entry point
//! RUST_LOG=order_placement::workflow=debug,actor_framework=warn cargo run
//! ```
//!
//! Entry points log their payload once at `debug` using the `?` field syntax:
//!
//! ```rust,ignore
//! debug!(?lines, "execute called");
//! ```

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
