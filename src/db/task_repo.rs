use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::prelude::{Category, Task};
use super::entities::{category, task};

/// Tasks joined with their category, most recent id first. A task whose
/// category row is missing is dropped from the result, matching the inner
/// join the listing is defined as.
pub async fn list_tasks(
    db: &DatabaseConnection,
) -> Result<Vec<(task::Model, category::Model)>, sea_orm::DbErr> {
    let rows = Task::find()
        .find_also_related(Category)
        .order_by_desc(task::Column::Id)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(task, category)| category.map(|category| (task, category)))
        .collect())
}

/// The id column is left unset so the store assigns it. A `category_id` that
/// does not reference an existing category fails the foreign key constraint
/// and the error propagates to the caller.
pub async fn insert_task(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    due_date: NaiveDateTime,
    category_id: i32,
) -> Result<task::Model, sea_orm::DbErr> {
    let model = task::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        due_date: Set(due_date),
        category_id: Set(category_id),
        ..Default::default()
    };
    model.insert(db).await
}

/// Deleting an id that is not present removes nothing and is not an error.
pub async fn delete_task(db: &DatabaseConnection, id: i32) -> Result<bool, sea_orm::DbErr> {
    let result = Task::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
