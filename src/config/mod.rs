mod settings;

pub use settings::{GatewayConfig, LogConfig, ServerConfig, Settings};
