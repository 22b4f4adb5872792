//! Service entry-point: loads settings, prepares storage and runs the HTTP
//! server.

mod server;

use std::io;
use std::time::Duration;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};
use techassessment::inbound::http::health::HealthState;
use techassessment::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

async fn connect_database(settings: &AppSettings, url: &str) -> io::Result<DbPool> {
    if settings.run_migrations() {
        run_pending_migrations(url)
            .await
            .map_err(|e| io::Error::other(format!("database migration failed: {e}")))?;
    }
    let config = PoolConfig::new(url)
        .with_max_size(settings.db_max_connections())
        .with_connection_timeout(DB_CONNECT_TIMEOUT);
    DbPool::new(config)
        .await
        .map_err(|e| io::Error::other(format!("database pool setup failed: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            let pool = connect_database(&settings, url).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("APP_DATABASE_URL not set; users are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "listening");
    health_state.mark_ready();
    server.await
}
