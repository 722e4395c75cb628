//! Storefront Binary
//!
//! Opens the configured product store, seeds it and the order store, and
//! logs a summary of what is held.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storefront
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_CONFIG`: Path to the YAML config (default: config.yaml; missing file means defaults)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use anyhow::Context;
use storefront::config::{DEFAULT_CONFIG_PATH, load_config_or_default};
use storefront::telemetry::init_tracing;
use storefront::Container;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("loading configuration from {config_path}"))?;

    init_tracing(&config.observability.logging);
    tracing::info!(config = %config_path, "Starting storefront");

    let container = Container::from_config(&config)
        .await
        .context("wiring storefront components")?;

    let products = container.products().get_products().await?;
    let orders = container.orders().get_all_orders().await?;
    let open_orders = orders
        .iter()
        .filter(|o| !o.status.is_delivered())
        .count();

    tracing::info!(
        products = products.len(),
        orders = orders.len(),
        open_orders,
        "Storefront ready"
    );

    for order in &orders {
        tracing::debug!(
            order_id = %order.order_id,
            status = %order.status,
            items = order.product_count(),
            total = order.total(),
            "Order"
        );
    }

    match container.supplier().get_products().await {
        Ok(supplier_products) => {
            tracing::info!(count = supplier_products.len(), "Supplier catalog reachable");
        }
        Err(e) => tracing::warn!(error = %e, "Supplier catalog unavailable"),
    }

    Ok(())
}
