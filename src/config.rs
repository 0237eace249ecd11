use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub address: SocketAddr,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("HOST must be an IP address, got {host:?}"))?;
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            database_url,
            address: SocketAddr::new(ip, port),
        })
    }
}
