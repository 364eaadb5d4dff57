use anyhow::{Context, Result};

/// Environment variable naming the store's connection URL,
/// e.g. `sqlite:/var/lib/linkr/linkr.db`.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment, honoring a `.env` file
    /// in the working directory if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var(ENV_DATABASE_URL)
            .with_context(|| format!("{ENV_DATABASE_URL} must be set (sqlite connection URL)"))?;

        Ok(Self { database_url })
    }
}
