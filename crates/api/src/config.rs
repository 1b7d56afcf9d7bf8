//! Application configuration with explicit override merging.

/// Server configuration.
///
/// Defaults can be layered with a [`ConfigOverride`] via [`Config::merge`]:
/// scalar fields take the override value when present, array fields are
/// merged as a union preserving base order.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Channel assumed when a request carries no `X-Channel-Code` header.
    pub default_channel_code: Option<String>,
    /// CORS origins; empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

/// Partial configuration layered over a base [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOverride {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub default_channel_code: Option<String>,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables over the defaults.
    ///
    /// Reads:
    /// - `HOST` — bind address (default: `"0.0.0.0"`)
    /// - `PORT` — listen port (default: `3000`)
    /// - `RUST_LOG` — tracing filter directive (default: `"info"`)
    /// - `DEFAULT_CHANNEL_CODE` — channel fallback (default: `"WEB"`)
    /// - `CORS_ALLOWED_ORIGINS` — comma-separated origin list
    pub fn from_env() -> Self {
        Self::default().merge(ConfigOverride::from_env())
    }

    /// Applies an override: scalars win when present, arrays are unioned.
    pub fn merge(self, other: ConfigOverride) -> Self {
        Self {
            host: other.host.unwrap_or(self.host),
            port: other.port.unwrap_or(self.port),
            log_level: other.log_level.unwrap_or(self.log_level),
            default_channel_code: other.default_channel_code.or(self.default_channel_code),
            cors_allowed_origins: merge_list(self.cors_allowed_origins, other.cors_allowed_origins),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            default_channel_code: Some("WEB".to_string()),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ConfigOverride {
    /// Reads override values from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").ok(),
            port: std::env::var("PORT").ok().and_then(|p| p.parse().ok()),
            log_level: std::env::var("RUST_LOG").ok(),
            default_channel_code: std::env::var("DEFAULT_CHANNEL_CODE").ok(),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Union of base and extra, preserving base order and skipping duplicates.
fn merge_list(base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    let mut merged = base;
    for item in extra {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    merged
}
