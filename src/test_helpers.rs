use std::sync::Arc;

use crate::{db, state::AppState};

/// Fresh in-memory store with the schema and seed categories applied. A
/// single-connection pool keeps the in-memory database alive between
/// requests.
pub async fn test_state() -> Arc<AppState> {
    let db = db::connect("sqlite::memory:", 1, 1)
        .await
        .expect("connect test database");
    AppState::new(db)
}
