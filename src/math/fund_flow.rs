// Storage fund flow for a closed epoch
// ------------------------------------
// inflow  = reinvestment + storage charge + leftover inflow
// outflow = storage rebate
// net     = inflow - outflow (signed, may go negative)
//
// All amounts are arbitrary precision. An epoch without end-of-epoch data maps
// to an all-None result so callers can tell "no data" apart from "zero flow".

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

use crate::models::EpochSummary;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundFlowError {
    #[error("malformed amount in `{field}`: {value:?}")]
    MalformedAmount { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundFlowResult {
    pub fund_inflow: Option<BigInt>,
    pub fund_outflow: Option<BigInt>,
    pub net_inflow: Option<BigInt>,
}

impl FundFlowResult {
    /// True when the result came from a missing summary.
    pub fn is_absent(&self) -> bool {
        self.fund_inflow.is_none() && self.fund_outflow.is_none() && self.net_inflow.is_none()
    }
}

/// Parse a non-negative decimal amount. Signs, whitespace and empty input are rejected.
/// Stricter than JavaScript `BigInt(...)`, which reads `""` as 0 and accepts `-5`, `0x10` and padding.
pub fn parse_amount(field: &'static str, value: &str) -> Result<BigInt, FundFlowError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FundFlowError::MalformedAmount { field, value: value.to_string() });
    }
    BigUint::parse_bytes(value.as_bytes(), 10)
        .map(BigInt::from)
        .ok_or_else(|| FundFlowError::MalformedAmount { field, value: value.to_string() })
}

pub fn compute_fund_flow(summary: Option<&EpochSummary>) -> Result<FundFlowResult, FundFlowError> {
    let Some(summary) = summary else {
        return Ok(FundFlowResult::default());
    };

    let fund_inflow = parse_amount("storageFundReinvestment", &summary.storage_fund_reinvestment)?
        + parse_amount("storageCharge", &summary.storage_charge)?
        + parse_amount("leftoverStorageFundInflow", &summary.leftover_storage_fund_inflow)?;
    let fund_outflow = parse_amount("storageRebate", &summary.storage_rebate)?;
    let net_inflow = &fund_inflow - &fund_outflow;

    Ok(FundFlowResult {
        fund_inflow: Some(fund_inflow),
        fund_outflow: Some(fund_outflow),
        net_inflow: Some(net_inflow),
    })
}
