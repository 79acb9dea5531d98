//! Process configuration read from the environment at startup.
//! Used by: main, state, store::mongo, auth::http.

use std::net::{Ipv4Addr, SocketAddr};

use url::Url;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_AUTH_SERVICE_URL: &str = "http://auth_service:5000/validate";
const DEFAULT_MONGO_URL: &str = "mongodb://mongo:27017";
const DEFAULT_DB_NAME: &str = "projectdb";
const DEFAULT_COLLECTION_NAME: &str = "analytics";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub auth_service_url: Url,
    pub mongo_url: String,
    pub db_name: String,
    pub collection_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses configuration from any key lookup. Missing or empty keys take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("PORT={raw}: {e}")))?,
            None => DEFAULT_PORT,
        };

        let auth_raw = get("AUTH_SERVICE_URL").unwrap_or_else(|| DEFAULT_AUTH_SERVICE_URL.into());
        let auth_service_url = Url::parse(&auth_raw)
            .map_err(|e| Error::Config(format!("AUTH_SERVICE_URL={auth_raw}: {e}")))?;

        Ok(Self {
            port,
            auth_service_url,
            mongo_url: get("MONGO_URL").unwrap_or_else(|| DEFAULT_MONGO_URL.into()),
            db_name: get("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            collection_name: get("MONGO_COLLECTION_NAME")
                .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.into()),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<()> {
        let config = Config::from_lookup(lookup(&[]))?;
        assert_eq!(config.port, 3000);
        assert_eq!(config.auth_service_url.as_str(), "http://auth_service:5000/validate");
        assert_eq!(config.mongo_url, "mongodb://mongo:27017");
        assert_eq!(config.db_name, "projectdb");
        assert_eq!(config.collection_name, "analytics");
        Ok(())
    }

    #[test]
    fn env_values_override_defaults() -> Result<()> {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("AUTH_SERVICE_URL", "http://localhost:5000/validate"),
            ("MONGO_URL", "mongodb://localhost:27017"),
            ("MONGO_DB_NAME", "metrics"),
            ("MONGO_COLLECTION_NAME", "rollups"),
        ]))?;
        assert_eq!(config.port, 8080);
        assert_eq!(config.auth_service_url.host_str(), Some("localhost"));
        assert_eq!(config.mongo_url, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "metrics");
        assert_eq!(config.collection_name, "rollups");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        Ok(())
    }

    #[test]
    fn empty_values_fall_back_to_defaults() -> Result<()> {
        let config = Config::from_lookup(lookup(&[("PORT", ""), ("MONGO_DB_NAME", "  ")]))?;
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_name, "projectdb");
        Ok(())
    }

    #[test]
    fn invalid_port_rejected() {
        let result = Config::from_lookup(lookup(&[("PORT", "http")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_auth_url_rejected() {
        let result = Config::from_lookup(lookup(&[("AUTH_SERVICE_URL", "not a url")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
