//! Catalog smoke check: wires config, observability, and the HTTP backend
//! together against a running API.

use anyhow::Context;

use repairstock_client::{HttpBackend, Session};
use repairstock_core::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    repairstock_observability::init();

    let base_url = std::env::var("REPAIRSTOCK_API_URL").unwrap_or_else(|_| {
        tracing::warn!("REPAIRSTOCK_API_URL not set; using http://localhost:3000");
        "http://localhost:3000".to_string()
    });
    let token = std::env::var("REPAIRSTOCK_TOKEN").unwrap_or_default();
    let user_id: UserId = std::env::var("REPAIRSTOCK_USER_ID")
        .context("REPAIRSTOCK_USER_ID must be set")?
        .parse()
        .context("REPAIRSTOCK_USER_ID must be a UUID")?;

    let session = Session::new(user_id, token);
    let backend = HttpBackend::new(base_url);

    let products = backend.fetch_catalog(&session).await?;
    let offers = repairstock_catalog::flatten(&products);
    let sellable = repairstock_catalog::in_stock(offers.clone());

    tracing::info!(
        products = products.len(),
        offers = offers.len(),
        sellable = sellable.len(),
        "catalog loaded"
    );
    Ok(())
}
