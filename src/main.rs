mod aggregate;
mod config;
mod db;
mod error;
mod images;
mod models;
mod params;
mod routes;
mod store;

use crate::config::AppConfig;
use crate::images::ImageResolver;
use crate::store::PgStore;
use axum::extract::FromRef;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub store: PgStore,
    pub config: AppConfig,
    pub resolver: ImageResolver,
}

impl FromRef<AppState> for sqlx::PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for PgStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for ImageResolver {
    fn from_ref(state: &AppState) -> Self {
        state.resolver.clone()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = AppConfig::load().expect("Failed to load config.toml");

    let pool = db::setup_database(&settings).await?;
    let state = AppState {
        store: PgStore::new(pool.clone()),
        resolver: ImageResolver::new(&settings.storage),
        pool,
        config: settings.clone(),
    };
    let app = routes::create_router(state);

    tracing::info!(addr = %settings.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
