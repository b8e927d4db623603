use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::{services::ServeDir, trace::TraceLayer};

use taskboard::{
    config::AppConfig,
    db,
    logging::init_tracing,
    routes::{log_request, router},
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.log_level);

    let db = db::connect(&cfg.database_url, cfg.db_max_connections, cfg.db_min_idle)
        .await
        .context("failed to open database")?;

    let state = AppState::new(db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .fallback_service(ServeDir::new(&cfg.static_dir))
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
