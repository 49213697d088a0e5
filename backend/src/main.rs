//! Backend entry point: loads configuration, prepares the database and
//! serves the HTTP surface.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use autoparts::inbound::http::health::HealthState;
use autoparts::inbound::http::session_config::{BuildMode, session_settings_from_env};
use autoparts::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use autoparts::settings::AppSettings;

use server::{ServerConfig, create_server};

fn startup_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(error.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(startup_error)?;
    let session =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .map_err(startup_error)?;
    let database_url = settings.database_url().map_err(startup_error)?;
    let bind_addr = settings.bind_addr().map_err(startup_error)?;

    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(startup_error)?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
    )
    .await
    .map_err(startup_error)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, bind_addr, pool)
        .with_import_max_bytes(settings.import_max_bytes());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "autoparts listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
