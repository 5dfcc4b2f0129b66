use rocket::serde::{Deserialize, Serialize};

use crate::engine::service::EpochFundFlow;
use crate::math::units::format_optional;

#[derive(Deserialize, rocket::FromForm)]
pub struct RecentFundFlowQuery {
    pub limit: Option<usize>,
}

/// Amounts are raw decimal strings; `null` means the epoch has no data yet.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundFlowResponse {
    pub timestamp_utc: String,
    pub epoch: String,
    pub fund_inflow: Option<String>,
    pub fund_outflow: Option<String>,
    pub net_inflow: Option<String>,
    pub fund_inflow_display: Option<String>,
    pub fund_outflow_display: Option<String>,
    pub net_inflow_display: Option<String>,
    pub error: Option<String>,
}

impl FundFlowResponse {
    pub fn from_flow(result: &EpochFundFlow, decimals: u32, symbol: &str) -> Self {
        let flow = &result.flow;
        Self {
            timestamp_utc: chrono::Utc::now().to_rfc3339(),
            epoch: result.epoch.clone(),
            fund_inflow: flow.fund_inflow.as_ref().map(|v| v.to_string()),
            fund_outflow: flow.fund_outflow.as_ref().map(|v| v.to_string()),
            net_inflow: flow.net_inflow.as_ref().map(|v| v.to_string()),
            fund_inflow_display: format_optional(flow.fund_inflow.as_ref(), decimals, symbol),
            fund_outflow_display: format_optional(flow.fund_outflow.as_ref(), decimals, symbol),
            net_inflow_display: format_optional(flow.net_inflow.as_ref(), decimals, symbol),
            error: None,
        }
    }

    pub fn error(epoch: String, message: String) -> Self {
        Self {
            timestamp_utc: chrono::Utc::now().to_rfc3339(),
            epoch,
            fund_inflow: None,
            fund_outflow: None,
            net_inflow: None,
            fund_inflow_display: None,
            fund_outflow_display: None,
            net_inflow_display: None,
            error: Some(format!("ERROR: {}", message)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecentFundFlowResponse {
    pub timestamp_utc: String,
    pub epochs: Vec<FundFlowResponse>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fund_flow::FundFlowResult;
    use num_bigint::BigInt;

    #[test]
    fn test_present_flow_renders_strings() {
        let result = EpochFundFlow {
            epoch: "12".to_string(),
            flow: FundFlowResult {
                fund_inflow: Some(BigInt::from(2_500_000_000u64)),
                fund_outflow: Some(BigInt::from(3_000_000_000u64)),
                net_inflow: Some(BigInt::from(-500_000_000i64)),
            },
        };
        let dto = FundFlowResponse::from_flow(&result, 9, "IOTA");

        assert_eq!(dto.fund_inflow.as_deref(), Some("2500000000"));
        assert_eq!(dto.net_inflow.as_deref(), Some("-500000000"));
        assert_eq!(dto.fund_outflow_display.as_deref(), Some("3 IOTA"));
        assert_eq!(dto.net_inflow_display.as_deref(), Some("-0.5 IOTA"));
        assert!(dto.error.is_none());
    }

    #[test]
    fn test_absent_flow_serializes_as_null() {
        let result = EpochFundFlow { epoch: "13".to_string(), flow: FundFlowResult::default() };
        let value = serde_json::to_value(FundFlowResponse::from_flow(&result, 9, "IOTA"))
            .expect("Failed to serialize response");

        assert!(value["fund_inflow"].is_null());
        assert!(value["net_inflow"].is_null());
        assert!(value["net_inflow_display"].is_null());
        assert_eq!(value["epoch"], "13");
    }
}
