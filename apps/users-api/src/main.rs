//! Users API - REST server over the users domain

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserRepository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Built once at startup; every router shares the same store handle.
    let state = AppState {
        config,
        users: InMemoryUserRepository::with_seed_users(),
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app.clone()));

    info!("Starting Users API on port {}", state.config.server.port);

    create_app(app, &state.config.server).await?;

    info!("Users API shutdown complete");
    Ok(())
}
