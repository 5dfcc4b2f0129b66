use rocket::{routes, Build, Rocket};
use std::sync::Arc;

use crate::bootstrap::AppState;

pub mod dto;
pub mod routes;

/// Rocket instance with state and every route mounted; `main` only adds the port.
pub fn build_rocket(app_state: Arc<AppState>, figment: rocket::figment::Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(app_state)
        .mount("/", routes![
            routes::epoch_storage_fund_flow,
            routes::recent_storage_fund_flow,
            routes::health,
        ])
}
