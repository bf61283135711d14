//! Command-line and environment configuration for the `rebate` binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` holds no valid filter
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Where to find the discount rules.
#[derive(Debug, Clone, Args)]
pub struct RulesConfig {
    /// Path to the JSON discount rule file
    #[arg(long, env = "REBATE_RULES", default_value = "discount_rules.json")]
    pub rules: PathBuf,
}

/// HTTP service settings.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    #[command(flatten)]
    pub rules: RulesConfig,

    /// Address to bind
    #[arg(long, env = "REBATE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "REBATE_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A one-off discount quote.
#[derive(Debug, Clone, Args)]
pub struct QuoteConfig {
    #[command(flatten)]
    pub rules: RulesConfig,

    /// Order amount
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Customer type, matched exactly against each rule's condition
    #[arg(long, default_value = "")]
    pub customer_type: String,

    /// Print every rule's evaluation instead of just the outcome
    #[arg(long)]
    pub explain: bool,
}
