use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub mongo_url: String,
    pub mongo_database: String,
    pub connect_timeout: Duration,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let connect_timeout_secs: u64 = env::var("MONGO_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("MONGO_CONNECT_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            mongo_url: env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017/fiber-hrms".to_string()),
            mongo_database: env::var("MONGO_DATABASE").unwrap_or_else(|_| "fiber-hrms".to_string()),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}
