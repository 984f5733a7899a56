use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Anything set here overrides the configuration
/// file and environment.
#[derive(Parser, Debug, Default)]
#[command(
    name = "apns-proxy",
    version,
    about = "A local HTTP proxy for the Apple Push Notification service"
)]
pub struct Cli {
    /// Send pushes through the development (sandbox) endpoint
    #[arg(long)]
    pub dev: bool,

    /// Log each relayed push and transport failure
    #[arg(long)]
    pub verbose: bool,

    /// Address and port to listen on
    #[arg(long)]
    pub listen: Option<String>,

    /// Path to a configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the client certificate (PEM)
    #[arg(long)]
    pub cert: Option<PathBuf>,

    /// Path to the certificate private key (PEM)
    #[arg(long)]
    pub key: Option<PathBuf>,
}
