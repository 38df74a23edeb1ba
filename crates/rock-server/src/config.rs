use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};

/// Placeholder JWT secrets that MUST NOT be used.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "change-me-to-a-random-string",
    "dev-secret-change-me",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let jwt_secret = lookup("ROCK_JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            bail!("ROCK_JWT_SECRET is unset or still a placeholder; set it in your .env file");
        }

        let db_path: PathBuf = lookup("ROCK_DB_PATH").unwrap_or_else(|| "rocks.db".into()).into();
        let host = lookup("ROCK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("ROCK_PORT") {
            Some(port) => port.parse::<u16>().with_context(|| format!("invalid ROCK_PORT '{}'", port))?,
            None => 8000,
        };

        Ok(Self {
            jwt_secret,
            db_path,
            host,
            port,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().with_context(|| format!("invalid listen address '{}'", addr))
    }
}
