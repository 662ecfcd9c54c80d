use feed_quote_tracker::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // INFO by default; RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}, data_dir={}",
        config.server.host,
        config.server.port,
        config.storage.data_dir
    );

    feed_quote_tracker::run_server(&config).await
}
