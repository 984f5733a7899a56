use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Route pushes through the development endpoint instead of production.
    #[serde(default)]
    pub development: bool,
    /// Client certificate (PEM). Only used together with `key`.
    pub certificate: Option<PathBuf>,
    /// Certificate private key (PEM). Only used together with `certificate`.
    pub key: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Surface per-push relay and failure lines.
    #[serde(default)]
    pub verbose: bool,
}

fn default_listen() -> String {
    "127.0.0.1:1666".to_string()
}

impl Settings {
    /// Load settings, layered low to high: built-in defaults, the optional
    /// configuration file, `APNS_PROXY_*` environment variables, and
    /// finally any explicit command-line flags.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let mut builder = Config::builder().set_default("server.listen", default_listen())?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(path.clone()));
        }

        // APNS_PROXY_SERVER__LISTEN, APNS_PROXY_GATEWAY__DEVELOPMENT, etc.
        builder = builder.add_source(
            Environment::with_prefix("APNS_PROXY")
                .separator("__")
                .try_parsing(true),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(listen) = &cli.listen {
            settings.server.listen = listen.clone();
        }
        if cli.dev {
            settings.gateway.development = true;
        }
        if cli.verbose {
            settings.log.verbose = true;
        }
        if let Some(cert) = &cli.cert {
            settings.gateway.certificate = Some(cert.clone());
        }
        if let Some(key) = &cli.key {
            settings.gateway.key = Some(key.clone());
        }

        Ok(settings)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}
