use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::Result;
use mongodb::{Collection, Database};

use super::dto::{CreateTask, UpdateTask};
use super::model::Task;

fn tasks(db: &Database) -> Collection<Task> {
    db.collection("tasks")
}

pub async fn create_task(db: &Database, body: CreateTask) -> Result<Task> {
    let mut task = Task {
        id: None,
        title: body.title,
        description: body.description,
        priority: body.priority,
        due_date: body.due_date,
        status: "Pending".to_string(),
        created_at: Utc::now(),
    };

    let res = tasks(db).insert_one(&task).await?;
    task.id = res.inserted_id.as_object_id();

    Ok(task)
}

pub async fn list_tasks(db: &Database) -> Result<Vec<Task>> {
    tasks(db).find(doc! {}).await?.try_collect().await
}

/// Applies a partial patch; returns whether any document matched.
pub async fn update_task(db: &Database, id: ObjectId, patch: &UpdateTask) -> Result<bool> {
    let set = patch.set_document();

    // The store rejects an empty $set, so an empty patch degrades to an
    // existence check with the same matched/not-found outcome.
    if set.is_empty() {
        return Ok(tasks(db).find_one(doc! { "_id": id }).await?.is_some());
    }

    let res = tasks(db)
        .update_one(doc! { "_id": id }, doc! { "$set": set })
        .await?;

    Ok(res.matched_count > 0)
}

/// Removes by id; returns whether a document was deleted.
pub async fn delete_task(db: &Database, id: ObjectId) -> Result<bool> {
    let res = tasks(db).delete_one(doc! { "_id": id }).await?;
    Ok(res.deleted_count > 0)
}
