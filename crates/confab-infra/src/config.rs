//! Gateway configuration loader.
//!
//! Reads `confab.toml` (or the file named by `CONFAB_CONFIG`) and layers
//! environment overrides on top. A missing or malformed `./confab.toml`
//! falls back to [`GatewayConfig::default()`]. A file named explicitly by
//! `CONFAB_CONFIG` must load, and a malformed environment value is always
//! an error.
//!
//! Loading runs before the tracing subscriber exists (the log format is part
//! of the config), so a fallback is returned in [`LoadedConfig`] for the
//! caller to log once tracing is up.

use std::path::{Path, PathBuf};

use confab_types::config::{GatewayConfig, LogFormat};
use confab_types::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CONFAB_CONFIG";

/// Config file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "confab.toml";

/// A resolved configuration plus why the file was skipped, if it was.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: GatewayConfig,
    /// Set when a config file exists but could not be used.
    pub fallback: Option<ConfigError>,
}

impl LoadedConfig {
    /// Emit the fallback reason, if any. Call after tracing is initialized.
    pub fn log_fallback(&self) {
        if let Some(err) = &self.fallback {
            tracing::warn!("{err}, using defaults");
        }
    }
}

/// Resolve the full process configuration from file and environment.
pub async fn load_gateway_config() -> Result<LoadedConfig, ConfigError> {
    let lookup = |name: &str| std::env::var(name).ok();
    let mut loaded = match non_empty(lookup(CONFIG_PATH_ENV)) {
        Some(explicit) => LoadedConfig {
            config: read_config_file(Path::new(&explicit)).await?,
            fallback: None,
        },
        None => load_config_file(&resolve_config_path(lookup)).await,
    };
    apply_env_overrides(&mut loaded.config, lookup)?;
    Ok(loaded)
}

/// Path of the config file: `CONFAB_CONFIG` if set, else `./confab.toml`.
pub fn resolve_config_path<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup(CONFIG_PATH_ENV))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load `path` as TOML, falling back to defaults when missing or malformed.
///
/// A missing file is the normal case and is not reported as a fallback.
pub async fn load_config_file(path: &Path) -> LoadedConfig {
    match read_config_file(path).await {
        Ok(config) => LoadedConfig {
            config,
            fallback: None,
        },
        Err(ConfigError::Read { .. }) if !path.exists() => LoadedConfig {
            config: GatewayConfig::default(),
            fallback: None,
        },
        Err(err) => LoadedConfig {
            config: GatewayConfig::default(),
            fallback: Some(err),
        },
    }
}

/// Read and parse `path` as TOML.
pub async fn read_config_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Apply environment overrides. `lookup` abstracts `std::env::var` for tests.
///
/// Empty values count as unset, so `PORT=` keeps the configured port.
pub fn apply_env_overrides<F>(config: &mut GatewayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| non_empty(lookup(name));

    if let Some(port) = var("PORT") {
        config.port = parse_env("PORT", &port)?;
    }
    if let Some(host) = var("CONFAB_HOST") {
        config.host = host;
    }
    if let Some(path) = var("CONFAB_WS_PATH") {
        config.ws_path = path;
    }
    if let Some(ttl) = var("CONFAB_SESSION_TTL_SECS") {
        config.session_ttl_secs = parse_env("CONFAB_SESSION_TTL_SECS", &ttl)?;
    }
    if let Some(url) = var("CONFAB_CLASSIFIER_URL") {
        config.classifier_url = Some(url);
    }
    if let Some(url) = var("CONFAB_ENGAGER_URL") {
        config.engager_url = Some(url);
    }
    if let Some(path) = var("CONFAB_MESSAGES_PATH") {
        config.messages_path = Some(path);
    }
    if let Some(format) = var("CONFAB_LOG_FORMAT") {
        config.log_format = format.parse::<LogFormat>().map_err(|_| ConfigError::InvalidEnv {
            var: "CONFAB_LOG_FORMAT".to_string(),
            value: format.clone(),
        })?;
    }
    if let Some(otel) = var("CONFAB_OTEL") {
        config.otel = parse_bool("CONFAB_OTEL", &otel)?;
    }

    // axum rejects routes that do not start with a slash.
    if !config.ws_path.starts_with('/') {
        config.ws_path = format!("/{}", config.ws_path);
    }

    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
