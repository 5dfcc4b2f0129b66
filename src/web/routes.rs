use rocket::serde::json::Json;
use rocket::{get, State};
use std::sync::Arc;

use crate::bootstrap::AppState;
use crate::engine::service::{epoch_fund_flow, recent_fund_flows};
use crate::web::dto::{FundFlowResponse, RecentFundFlowQuery, RecentFundFlowResponse};

#[get("/api/v1/epochs/<epoch>/storage-fund-flow")]
pub async fn epoch_storage_fund_flow(
    epoch: u64,
    app_state: &State<Arc<AppState>>,
) -> Json<FundFlowResponse> {
    match epoch_fund_flow(&app_state.epoch_client, epoch).await {
        Ok(result) => Json(FundFlowResponse::from_flow(
            &result,
            app_state.coin_decimals,
            &app_state.coin_symbol,
        )),
        Err(e) => {
            log::error!("Failed to compute storage fund flow for epoch {}: {:#}", epoch, e);
            Json(FundFlowResponse::error(epoch.to_string(), format!("{:#}", e)))
        }
    }
}

#[get("/api/v1/storage-fund-flow?<query..>")]
pub async fn recent_storage_fund_flow(
    query: RecentFundFlowQuery,
    app_state: &State<Arc<AppState>>,
) -> Json<RecentFundFlowResponse> {
    let max = app_state.recent_epochs_limit;
    let limit = query.limit.unwrap_or(max).max(1).min(max);

    match recent_fund_flows(&app_state.epoch_client, limit).await {
        Ok(flows) => Json(RecentFundFlowResponse {
            timestamp_utc: chrono::Utc::now().to_rfc3339(),
            epochs: flows.iter()
                .map(|f| FundFlowResponse::from_flow(f, app_state.coin_decimals, &app_state.coin_symbol))
                .collect(),
            error: None,
        }),
        Err(e) => {
            log::error!("Failed to compute recent storage fund flows: {:#}", e);
            Json(RecentFundFlowResponse {
                timestamp_utc: chrono::Utc::now().to_rfc3339(),
                epochs: Vec::new(),
                error: Some(format!("ERROR: {:#}", e)),
            })
        }
    }
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}
