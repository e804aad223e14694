use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub skip_migrations: bool,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub introspection_enabled: bool,
    pub setup_idle_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            skip_migrations: env::var("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.skip_migrations),
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            introspection_enabled: env::var("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(defaults.introspection_enabled),
            setup_idle_timeout: env::var("LEAGUE_SETUP_IDLE_MINUTES")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(|minutes| Duration::from_secs(minutes * 60))
                .unwrap_or(defaults.setup_idle_timeout),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: 30,
            skip_migrations: false,
            port: 8080,
            allowed_origins: parse_origins("http://localhost:3000,http://localhost:3001"),
            introspection_enabled: false,
            setup_idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
