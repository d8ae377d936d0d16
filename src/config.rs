use anyhow::{Result, bail};
use std::time::Duration;

/// Environment variable carrying the Cosmos DB (Mongo API) connection string.
pub const CONN_STRING_VAR: &str = "COSMOS_DB_CONN_STRING";

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const OP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub conn_string: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_var(CONN_STRING_VAR)
    }

    fn from_var(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Ok(Self { conn_string: value }),
            _ => bail!("{} environment variable must be defined", var),
        }
    }
}
