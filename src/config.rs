//! Runtime configuration from environment variables.

use crate::error::ConfigError;
use crate::store::validate_schema_name;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/exam";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema holding the `examinee` table.
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `EXAM_SCHEMA`, `BIND_ADDR` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let schema = lookup("EXAM_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        validate_schema_name(&schema)?;

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
        };

        Ok(AppConfig {
            database_url,
            schema,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.schema, "public");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/exam_admin"),
            ("EXAM_SCHEMA", "exam"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db/exam_admin");
        assert_eq!(cfg.schema, "exam");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.max_connections, 12);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("EXAM_SCHEMA", "bad-schema")])),
            Err(ConfigError::InvalidSchema(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")])),
            Err(ConfigError::InvalidValue { key: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "0")])),
            Err(ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. })
        ));
    }
}
