//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Output goes to stderr so the product table on stdout stays clean.
//!
//! ```bash
//! # Loads, mutations and their failures
//! RUST_LOG=info inventory list
//!
//! # Also request URLs, filter results and dropped stale loads
//! RUST_LOG=debug inventory list --name wid
//!
//! # Only the HTTP layer
//! RUST_LOG=inventory_client::api=debug inventory list
//! ```
//!
//! With `RUST_LOG=info` a successful add reads:
//!
//! ```text
//! INFO Inventory app started api=https://localhost:7083/
//! INFO create: Created product
//! INFO list: Listed products count=4 url=https://localhost:7083/api/Products
//! INFO Products loaded generation=2 count=4
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
