use rocket::launch;
use std::sync::Arc;

use storage_fund_flow::{bootstrap, config, web};

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    // Load configuration
    let config = config::Config::from_env()
        .expect("Failed to load configuration");

    // Build application state
    let app_state = Arc::new(
        bootstrap::AppState::new(&config)
            .expect("Failed to initialize application state")
    );
    log::info!("Serving storage fund flow from {}", app_state.epoch_client.rpc_url());

    // Configure Rocket
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    web::build_rocket(app_state, figment)
}
