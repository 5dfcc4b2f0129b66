use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::chain::epoch_client::DEFAULT_EPOCHS_METHOD;

/// Unset falls back silently; a value that does not parse falls back with a warning.
fn parse_env_or<T: FromStr + Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{}={:?} is not valid, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub rpc_epochs_method: String,
    pub rpc_timeout_secs: u64,
    pub port: u16,

    // Display
    pub coin_decimals: u32,
    pub coin_symbol: String,

    pub recent_epochs_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load configuration files (secrets first, then public config)
        dotenv::from_filename("secrets.env").ok();
        dotenv::from_filename("config/service.env").ok();
        dotenv::dotenv().ok();

        let rpc_url = env::var("RPC_URL")
            .map_err(|_| "RPC_URL must be set")?;
        url::Url::parse(&rpc_url)
            .map_err(|e| format!("RPC_URL is not a valid URL: {}", e))?;

        Ok(Config {
            rpc_url,
            rpc_epochs_method: env::var("RPC_EPOCHS_METHOD")
                .unwrap_or_else(|_| DEFAULT_EPOCHS_METHOD.to_string()),
            rpc_timeout_secs: parse_env_or("RPC_TIMEOUT_SECS", 10),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            coin_decimals: parse_env_or("COIN_DECIMALS", 9),
            coin_symbol: env::var("COIN_SYMBOL")
                .unwrap_or_else(|_| "IOTA".to_string()),

            recent_epochs_limit: parse_env_or::<usize>("RECENT_EPOCHS_LIMIT", 20).max(1),
        })
    }
}
