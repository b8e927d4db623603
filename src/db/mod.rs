use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::migration::Migrator;

pub mod category_repo;
pub mod entities;
pub mod task_repo;

/// Opens the pooled connection, enables foreign keys and brings the schema up
/// to date. The returned handle is shared by all requests through `AppState`.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    min_idle: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(max_connections)
        .min_connections(min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    // sqlite keeps foreign keys off unless each connection asks for them
    db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
