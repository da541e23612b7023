//! Gateway configuration types.
//!
//! `GatewayConfig` mirrors `confab.toml`. Every field has a default so an
//! absent or empty file yields a working server on port 8080.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the gateway process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP path that upgrades to the WebSocket protocol.
    #[serde(default = "default_ws_path")]
    pub ws_path: String,

    /// Idle window after which a session entry expires.
    #[serde(default = "default_ttl_secs")]
    pub session_ttl_secs: u64,

    /// How often expired cache entries are purged in the background.
    #[serde(default = "default_ttl_secs")]
    pub sweep_interval_secs: u64,

    /// Chat content longer than this (in characters) gets the canned "too long" reply.
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,

    /// Endpoint of the external intent classifier. Canned replies when unset.
    #[serde(default)]
    pub classifier_url: Option<String>,

    /// Endpoint of the external engagement module host. Empty bursts when unset.
    #[serde(default)]
    pub engager_url: Option<String>,

    /// Lifetime of a cached classification result.
    #[serde(default = "default_ttl_secs")]
    pub classification_cache_ttl_secs: u64,

    /// HTTP timeout applied to remote gateway calls.
    #[serde(default = "default_gateway_timeout_secs")]
    pub gateway_timeout_secs: u64,

    /// JSON file overriding the built-in canned message table.
    #[serde(default)]
    pub messages_path: Option<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_ws_path() -> String {
    "/".to_string()
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_max_content_chars() -> usize {
    500
}

fn default_gateway_timeout_secs() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            ws_path: default_ws_path(),
            session_ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_ttl_secs(),
            max_content_chars: default_max_content_chars(),
            classifier_url: None,
            engager_url: None,
            classification_cache_ttl_secs: default_ttl_secs(),
            gateway_timeout_secs: default_gateway_timeout_secs(),
            messages_path: None,
            log_format: LogFormat::default(),
            otel: false,
        }
    }
}

impl GatewayConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        // A zero interval would make tokio's interval panic.
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }

    pub fn classification_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.classification_cache_ttl_secs)
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway_timeout_secs)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("invalid log format: '{other}'")),
        }
    }
}
