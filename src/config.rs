use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://instance/app.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `DATABASE_URL` (or the older `DB_URI`), `HOST` and `PORT`.
    /// Call after `dotenvy::dotenv()` so `.env` values are visible.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url,
            host,
            port,
        }
    }

    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, port).parse()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn database_url_wins_over_db_uri() {
        let config = config_from(&[
            ("DB_URI", "sqlite://legacy.db"),
            ("DATABASE_URL", "sqlite://camp.db"),
        ]);
        assert_eq!(config.database_url, "sqlite://camp.db");

        let config = config_from(&[("DB_URI", "sqlite://legacy.db")]);
        assert_eq!(config.database_url, "sqlite://legacy.db");
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = config_from(&[("PORT", "http"), ("HOST", "0.0.0.0")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(
            config.socket_addr(8080).unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }
}
