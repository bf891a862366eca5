use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::ErrorPolicy;
use crate::error::ConfigError;
use crate::feed::Escaping;

/// CORS proxy prefix; the encoded source URL is appended to it
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/raw?url=";
pub const DEFAULT_SOURCE_URL: &str = "https://xcmagg.lvido.tech/data.jsonl";
pub const DEFAULT_TABLE_ID: &str = "table";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub proxy_url: String,
    pub source_url: String,
    /// Local NDJSON file; when set, no network request is made
    pub feed_file: Option<PathBuf>,
    pub table_id: String,
    pub error_policy: ErrorPolicy,
    pub escaping: Escaping,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Output file for the page; `None` writes to stdout
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            feed_file: None,
            table_id: DEFAULT_TABLE_ID.to_string(),
            error_policy: ErrorPolicy::default(),
            escaping: Escaping::default(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            output: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let error_policy = match get("XCMAGG_ERROR_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|reason| invalid("XCMAGG_ERROR_POLICY", &value, reason))?,
            None => defaults.error_policy,
        };

        let escaping = match get("XCMAGG_RAW_HTML") {
            Some(value) if parse_bool("XCMAGG_RAW_HTML", &value)? => Escaping::Raw,
            _ => Escaping::Escape,
        };

        let timeout = match get("XCMAGG_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                    invalid("XCMAGG_TIMEOUT_SECS", &value, e.to_string())
                })?;
                (secs > 0).then_some(Duration::from_secs(secs))
            }
            None => defaults.timeout,
        };

        Ok(Self {
            proxy_url: lookup("XCMAGG_PROXY_URL").unwrap_or(defaults.proxy_url),
            source_url: get("XCMAGG_SOURCE_URL").unwrap_or(defaults.source_url),
            feed_file: get("XCMAGG_FEED_FILE").map(PathBuf::from),
            table_id: get("XCMAGG_TABLE_ID").unwrap_or(defaults.table_id),
            error_policy,
            escaping,
            timeout,
            output: get("XCMAGG_OUTPUT").map(PathBuf::from),
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, value, "expected a boolean".to_string())),
    }
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}
