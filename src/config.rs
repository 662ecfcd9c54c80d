use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both collection files
    pub data_dir: String,
    pub establishments_file: String,
    pub quotations_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            establishments_file: "establishments.json".to_string(),
            quotations_file: "quotations.json".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            static_dir: "public".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn establishments_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.establishments_file)
    }

    pub fn quotations_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.quotations_file)
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and the environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // config.toml / config.yaml / config.json next to the binary's working dir
        config = config.add_source(config::File::with_name("config").required(false));

        // FEEDQ_SERVER__PORT=8080, FEEDQ_STORAGE__DATA_DIR=/var/lib/feedq, ...
        config = config.add_source(
            config::Environment::with_prefix("FEEDQ")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
