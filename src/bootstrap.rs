use std::time::Duration;

use crate::chain::epoch_client::EpochClient;
use crate::config::Config;

pub struct AppState {
    pub epoch_client: EpochClient,

    // Display
    pub coin_decimals: u32,
    pub coin_symbol: String,

    pub recent_epochs_limit: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let epoch_client = EpochClient::new(
            config.rpc_url.clone(),
            config.rpc_epochs_method.clone(),
            Duration::from_secs(config.rpc_timeout_secs),
        )?;

        Ok(AppState {
            epoch_client,
            coin_decimals: config.coin_decimals,
            coin_symbol: config.coin_symbol.clone(),
            recent_epochs_limit: config.recent_epochs_limit,
        })
    }
}
