use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::category;
use super::entities::prelude::Category;

pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, sea_orm::DbErr> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
}
