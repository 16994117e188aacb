use std::env;

use crate::constants::DEFAULT_TIP_SEARCH_LIMIT;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub environment: String,
    /// Secret used to encrypt session cookies. A random key is generated when unset.
    pub session_secret: Option<String>,
    /// Development-only: create the well-known admin account on startup
    pub seed_default_admin: bool,
    pub tip_search_limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/trainer.db".to_string());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Length is checked when the session key is built
        let session_secret = env::var("SESSION_SECRET").ok().filter(|s| !s.is_empty());

        let seed_default_admin = parse_flag(
            &env::var("SEED_DEFAULT_ADMIN").unwrap_or_else(|_| "false".to_string()),
        )
        .ok_or("Invalid SEED_DEFAULT_ADMIN")?;

        let tip_search_limit = env::var("TIP_SEARCH_LIMIT")
            .unwrap_or_else(|_| DEFAULT_TIP_SEARCH_LIMIT.to_string())
            .parse()
            .map_err(|_| "Invalid TIP_SEARCH_LIMIT")?;

        Ok(Config {
            server_host,
            server_port,
            database_path,
            environment,
            session_secret,
            seed_default_admin,
            tip_search_limit,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            database_path: ":memory:".to_string(),
            environment: "test".to_string(),
            session_secret: None,
            seed_default_admin: false,
            tip_search_limit: 20,
        };
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    }
}
