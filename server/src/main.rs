use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bidmarket_migration::Migrator;
use bidmarket_server::config::ServerConfig;
use bidmarket_server::router::build_router;
use bidmarket_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let router = build_router(AppState { db });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("bidmarket listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
