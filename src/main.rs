mod app_state;
mod config;
mod database;
mod models;
mod routes;
pub use app_state::AppState;
pub use config::Config;

use crate::routes::make_app;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let address = config.bind_address();
    let app = make_app(config).await?;
    let listener = TcpListener::bind(&address).await?;
    info!("🚀 Server started successfully on {}", address);
    axum::serve(listener, app).await?;
    Ok(())
}
