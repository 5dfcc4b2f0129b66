use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::{EpochInfo, EpochPage};

pub const DEFAULT_EPOCHS_METHOD: &str = "iotax_getEpochs";

#[derive(Debug, Error, Deserialize, PartialEq, Eq)]
#[error("RPC error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

impl<T> RpcResponse<T> {
    fn into_result(self) -> Result<T> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(err.into()),
            (Some(result), None) => Ok(result),
            (None, None) => bail!("RPC response carried neither result nor error"),
        }
    }
}

/// Cursor is exclusive: epoch N is the first entry after cursor N-1.
fn cursor_for_epoch(epoch: u64) -> Value {
    match epoch.checked_sub(1) {
        Some(prev) => Value::String(prev.to_string()),
        None => Value::Null,
    }
}

pub struct EpochClient {
    client: Client,
    rpc_url: String,
    method: String,
}

impl EpochClient {
    pub fn new(rpc_url: String, method: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build RPC HTTP client")?;

        Ok(Self { client, rpc_url, method })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn get_epochs(&self, cursor: Value, limit: usize, descending: bool) -> Result<EpochPage> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": self.method,
            "params": [cursor, limit, descending],
        });
        log::debug!("{} params={}", self.method, body["params"]);

        let response: RpcResponse<EpochPage> = self.client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .context("Failed to reach epoch RPC endpoint")?
            .error_for_status()
            .context("Epoch RPC endpoint returned an HTTP error")?
            .json()
            .await
            .context("Failed to parse epoch RPC response")?;

        response.into_result()
            .with_context(|| format!("{} failed", self.method))
    }

    /// Fetch a single epoch. `None` when the ledger has not reached it yet.
    pub async fn get_epoch(&self, epoch: u64) -> Result<Option<EpochInfo>> {
        let page = self.get_epochs(cursor_for_epoch(epoch), 1, false).await?;
        let wanted = epoch.to_string();
        Ok(page.data.into_iter().find(|info| info.epoch == wanted))
    }

    /// Newest epochs first.
    pub async fn get_recent_epochs(&self, limit: usize) -> Result<EpochPage> {
        self.get_epochs(Value::Null, limit, true).await
    }
}
