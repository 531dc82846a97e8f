use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use jobboard_backend::config::{get_config, init_config};
use jobboard_backend::routes::api_router;
use jobboard_backend::store::PgStore;
use jobboard_backend::AppState;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = PgStore::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(store.pool()).await?;

    let state = AppState::new(store, config.batch_op_limit);

    let app = api_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
