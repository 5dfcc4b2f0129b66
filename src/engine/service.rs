use anyhow::{anyhow, Result};

use crate::chain::epoch_client::EpochClient;
use crate::math::fund_flow::{compute_fund_flow, FundFlowResult};
use crate::models::EpochInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochFundFlow {
    pub epoch: String,
    pub flow: FundFlowResult,
}

pub fn fund_flow_for_epoch(info: &EpochInfo) -> Result<EpochFundFlow> {
    if info.end_of_epoch_info.is_none() {
        log::warn!("Epoch {} has no end-of-epoch data yet", info.epoch);
    }
    let flow = compute_fund_flow(info.end_of_epoch_info.as_ref())?;
    Ok(EpochFundFlow { epoch: info.epoch.clone(), flow })
}

pub async fn epoch_fund_flow(client: &EpochClient, epoch: u64) -> Result<EpochFundFlow> {
    let info = client.get_epoch(epoch).await?
        .ok_or_else(|| anyhow!("epoch {} not found", epoch))?;

    let result = fund_flow_for_epoch(&info)?;
    log::info!("Computed storage fund flow for epoch {}", result.epoch);
    Ok(result)
}

pub async fn recent_fund_flows(client: &EpochClient, limit: usize) -> Result<Vec<EpochFundFlow>> {
    let page = client.get_recent_epochs(limit).await?;
    let flows = page.data.iter()
        .map(fund_flow_for_epoch)
        .collect::<Result<Vec<_>>>()?;

    log::info!("Computed storage fund flow for {} recent epochs", flows.len());
    Ok(flows)
}
