//! Food orders entry-point: loads settings, prepares storage, and serves
//! the REST API.

mod server;

use std::net::{IpAddr, SocketAddr};

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::info;

use food_orders::inbound::http::health::HealthState;
use food_orders::logging::init_tracing;
use food_orders::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use food_orders::settings::AppSettings;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let environment = settings.environment()?;
    init_tracing(environment, settings.log_level())
        .map_err(|err| eyre!("failed to initialise tracing: {err}"))?;
    info!(%environment, "settings loaded");

    let database_url = settings.database_url()?.to_owned();
    if settings.run_migrations() {
        let applied = run_pending_migrations_blocking(database_url.clone())
            .await
            .wrap_err("failed to run migrations")?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .wrap_err("failed to build database pool")?;

    let host: IpAddr = settings
        .host()
        .parse()
        .wrap_err_with(|| format!("invalid bind host `{}`", settings.host()))?;
    let config = ServerConfig::new(
        SocketAddr::new(host, settings.port()),
        settings.api_prefix(),
        pool,
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}
