// configuration
use std::env;

use anyhow::Context;

const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read from the environment once at startup and
/// owned by `main` — handlers never reach back into the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
