//! Server configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Load the starter tasks into the store
    pub seed: bool,
    /// JSON file to seed from instead of the built-in tasks
    pub seed_file: Option<PathBuf>,
    /// Serve the GraphiQL IDE on `GET /graphql`
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed: true,
            seed_file: None,
            graphiql: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// Read `TODO_HOST`, `TODO_PORT`, `TODO_SEED`, `TODO_SEED_FILE` and
    /// `TODO_GRAPHIQL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unparsable values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("TODO_HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TODO_HOST {:?}", raw);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("TODO_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TODO_PORT {:?}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let flag = |name: &str, default: bool| match lookup(name) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring invalid {} {:?}", name, raw);
                default
            }),
            None => default,
        };

        let seed_file = lookup("TODO_SEED_FILE")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            seed: flag("TODO_SEED", defaults.seed),
            seed_file,
            graphiql: flag("TODO_GRAPHIQL", defaults.graphiql),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TODO_HOST", "127.0.0.1"),
            ("TODO_PORT", "8080"),
            ("TODO_SEED", "off"),
            ("TODO_SEED_FILE", " /srv/todo/seed.json "),
            ("TODO_GRAPHIQL", " No "),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert!(!config.seed);
        assert_eq!(config.seed_file, Some(PathBuf::from("/srv/todo/seed.json")));
        assert!(!config.graphiql);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("TODO_HOST", "not-an-ip"),
            ("TODO_PORT", "99999"),
            ("TODO_SEED", "maybe"),
            ("TODO_SEED_FILE", "   "),
        ]);
        assert_eq!(config, ServerConfig::default());
    }
}
