use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::Response, Router};

use crate::state::AppState;

pub mod categories;
pub mod tasks;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(categories::router(state.clone()))
        .merge(tasks::router(state))
}

/// One log line per request, before it is handled. The arrival timestamp
/// comes from the subscriber's formatter.
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("[{}] {}", req.method(), req.uri().path());
    next.run(req).await
}
