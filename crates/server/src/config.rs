// ABOUTME: Application configuration loaded from environment variables.
// ABOUTME: Everything has a default; no variable is required to start the server.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub scrape_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let timeout_secs: u64 = env::var("SCRAPE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("SCRAPE_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            scrape_timeout: Duration::from_secs(timeout_secs),
            user_agent: env::var("SCRAPE_USER_AGENT").ok(),
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            scrape_timeout: Duration::from_secs(30),
            user_agent: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
