use sea_orm_migration::prelude::*;

/// Categories are read-only to the application, so a fresh database gets a
/// starter set here instead of shipping a pre-populated database file.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Name, Category::Color])
            .values_panic(["Errands".into(), "#f39c12".into()])
            .values_panic(["Home".into(), "#27ae60".into()])
            .values_panic(["Personal".into(), "#8e44ad".into()])
            .values_panic(["Work".into(), "#2980b9".into()])
            .to_owned();
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Name,
    Color,
}
