use std::sync::Arc;

use anyhow::Context;

use storefront_api::config::ApiConfig;
use storefront_cart::CartEngine;
use storefront_catalog::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    storefront_observability::init(config.log_format);

    let catalog = storefront_catalog::load_catalog(&config.catalog_path)
        .with_context(|| format!("loading catalog from {}", config.catalog_path.display()))?;
    let engine = CartEngine::new(Arc::new(CatalogStore::new(catalog)));

    let app = storefront_api::app::build_app(engine);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
