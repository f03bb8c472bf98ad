//! Process configuration, read from the environment after `.env` is loaded.
//!
//! | Variable           | Default                       |
//! |--------------------|-------------------------------|
//! | `SERVER_ADDR`      | `127.0.0.1:8080`              |
//! | `STORE_BACKEND`    | `memory` (`memory` / `mongo`) |
//! | `MONGODB_URI`      | `mongodb://127.0.0.1:27017`   |
//! | `MONGODB_DATABASE` | `restaurante`                 |

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_MONGODB_DATABASE: &str = "restaurante";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Mongo { uri: String, database: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    pub store: StoreBackend,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown STORE_BACKEND `{0}` (expected `memory` or `mongo`)")]
    UnknownBackend(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend = var("STORE_BACKEND", "memory");
        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "memory" | "" => StoreBackend::Memory,
            "mongo" | "mongodb" => StoreBackend::Mongo {
                uri: var("MONGODB_URI", DEFAULT_MONGODB_URI),
                database: var("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
            },
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        Ok(Self {
            server_addr: var("SERVER_ADDR", DEFAULT_SERVER_ADDR),
            store,
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
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_to_in_memory_store() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.server_addr, "127.0.0.1:8080");
        assert_eq!(cfg.store, StoreBackend::Memory);
    }

    #[test]
    fn mongo_backend_reads_connection_settings() {
        let cfg = Config::from_lookup(lookup(&[
            ("STORE_BACKEND", "Mongo"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("SERVER_ADDR", "0.0.0.0:3000"),
        ]))
        .unwrap();
        assert_eq!(cfg.server_addr, "0.0.0.0:3000");
        assert_eq!(
            cfg.store,
            StoreBackend::Mongo {
                uri: "mongodb://db:27017".into(),
                database: "restaurante".into(),
            }
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = Config::from_lookup(lookup(&[("STORE_BACKEND", "mysql")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownBackend("mysql".into()));
    }
}
