/// Service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ServerConfig {
    /// Database connection URL (default: a local SQLite file).
    /// Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `BIDMARKET_PORT`.
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://auctions.db?mode=rwc".to_owned()),
            port: std::env::var("BIDMARKET_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
