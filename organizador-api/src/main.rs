use std::net::SocketAddr;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("organizador_api=debug,tower_http=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(LocalTime::rfc_3339())
        .init();

    let settings = config::read_config()?;

    let connection_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_with(settings.database.with_db())
        .await?;
    tracing::info!(
        database = %settings.database.database_name,
        "connected to database"
    );

    sqlx::migrate!("./migrations").run(&connection_pool).await?;
    tracing::info!("database migrations applied");

    let app_state = factory::postgres_state(connection_pool);
    let app = router::create(app_state, &settings.application);

    let addr: SocketAddr = format!("{}:{}", settings.application.host, settings.application.port)
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
