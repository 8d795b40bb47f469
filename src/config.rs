use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file, or `:memory:`
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_max_bytes: u64,
    pub log_max_files: usize,
    pub seed_demo: bool,
    pub demo_owner_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        let database_path =
            PathBuf::from(env::var("DATABASE_PATH").unwrap_or_else(|_| "todo.db".to_string()));

        let log_dir = PathBuf::from(env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()));

        let log_max_bytes = match env::var("LOG_MAX_BYTES") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("LOG_MAX_BYTES must be a valid u64")?,
            Err(_) => rolling_logger::DEFAULT_MAX_BYTES,
        };

        let log_max_files = match env::var("LOG_MAX_FILES") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("LOG_MAX_FILES must be a valid usize")?,
            Err(_) => rolling_logger::DEFAULT_MAX_FILES,
        };

        let seed_demo = parse_flag(&env::var("SEED_DEMO").unwrap_or_else(|_| "true".to_string()))
            .context("SEED_DEMO must be true or false")?;

        let demo_owner_id = env::var("DEMO_OWNER_ID").unwrap_or_else(|_| "demo".to_string());

        Ok(Self {
            host,
            port,
            database_path,
            log_dir,
            log_max_bytes,
            log_max_files,
            seed_demo,
            demo_owner_id,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognised flag value {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" on ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
