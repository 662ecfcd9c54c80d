pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::{ApiError, ErrorResponse};

// Export logic types
pub use logic::{average_by_date, average_by_feed, summarize, RepoError};

// Export all model types
pub use model::*;

// Export store types
pub use store::{FileStore, JsonFile, Store, StoreError};

/// Build the file store and router described by `config`, then serve until shutdown.
pub async fn run_server(config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use std::sync::Arc;
    use tokio::net::TcpListener;

    let store = FileStore::from_config(&config.storage);
    log::info!(
        "Using store files {} and {}",
        store.establishments_path().display(),
        store.quotations_path().display()
    );

    let app = routes::build_app(Arc::new(store), &config.dashboard);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Feed quotation tracker running on http://{}", bind_address);
    if config.dashboard.enabled {
        log::info!(
            "Dashboard served from {} at http://{}/",
            config.dashboard.static_dir,
            bind_address
        );
    }

    axum::serve(listener, app).await?;

    Ok(())
}
