use std::env;

use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info,banque_api=debug";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL; accounts are kept in memory when unset
    pub db_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Origin allowed by the CORS layer, if any
    pub cors_origin: Option<String>,
    /// Directory served for paths no API route matches (the web front-end)
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors_origin: None,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first
    pub fn init() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            db_url: non_empty("DATABASE_URL"),
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .map(|port| {
                    port.trim().parse().unwrap_or_else(|_| {
                        warn!(
                            "PORT '{}' is not a valid port number, using {}",
                            port, defaults.port
                        );
                        defaults.port
                    })
                })
                .unwrap_or(defaults.port),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            cors_origin: non_empty("CORS_ORIGIN"),
            static_dir: non_empty("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.db_url, None);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.cors_origin, None);
        assert_eq!(config.static_dir, DEFAULT_STATIC_DIR);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/banque"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("CORS_ORIGIN", "http://localhost:5173"),
            ("STATIC_DIR", "/srv/banque/web"),
        ]);
        assert_eq!(config.static_dir, "/srv/banque/web");
        assert_eq!(config.db_url.as_deref(), Some("postgres://localhost/banque"));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn blank_or_invalid_values_fall_back() {
        let config = config_from(&[("DATABASE_URL", "  "), ("PORT", "eighty")]);
        assert_eq!(config.db_url, None);
        assert_eq!(config.port, DEFAULT_PORT);

        let config = config_from(&[("PORT", "70000")]);
        assert_eq!(config.port, DEFAULT_PORT);

        let config = config_from(&[("PORT", " 9090 ")]);
        assert_eq!(config.port, 9090);
    }
}
