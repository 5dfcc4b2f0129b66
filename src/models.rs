use serde::{Deserialize, Serialize};

/// End-of-epoch accounting as returned by the ledger RPC (`endOfEpochInfo`).
/// Amounts stay as decimal strings until the calculator parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochSummary {
    pub storage_fund_reinvestment: String,
    pub storage_charge: String,
    pub leftover_storage_fund_inflow: String,
    pub storage_rebate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochInfo {
    pub epoch: String,
    #[serde(default)]
    pub epoch_start_timestamp: Option<String>,
    // null while the epoch is still running
    #[serde(default)]
    pub end_of_epoch_info: Option<EpochSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochPage {
    pub data: Vec<EpochInfo>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}
