use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use shasha::config::AppConfig;
use shasha::store::Catalog;
use shasha::{routes, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shasha=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();

    let catalog = Arc::new(Catalog::open(&config.data_dir));
    tracing::info!(data_dir = %config.data_dir.display(), "Catalog stores opened");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(host = %addr, "Starting shasha catalog API server");

    let state = AppState {
        catalog,
        config: config.clone(),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
