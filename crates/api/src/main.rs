use std::sync::Arc;

use anyhow::Context;

use finledger_accounts::InMemoryAccountDirectory;
use finledger_api::app::SharedDirectory;
use finledger_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    finledger_observability::init(&config.log_filter, config.log_format);

    let directory: SharedDirectory = Arc::new(InMemoryAccountDirectory::new());
    let app = finledger_api::app::build_app(directory);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
