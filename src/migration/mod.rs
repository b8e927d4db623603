use sea_orm_migration::prelude::*;

mod m20240301_create_category;
mod m20240301_create_task;
mod m20240301_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_create_category::Migration),
            Box::new(m20240301_create_task::Migration),
            Box::new(m20240301_seed_categories::Migration),
        ]
    }
}
