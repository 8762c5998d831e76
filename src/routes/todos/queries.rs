use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::Result;
use mongodb::{Collection, Database};

use super::TodoItem;

fn todos(db: &Database) -> Collection<TodoItem> {
    db.collection("todos")
}

pub async fn create_todo(db: &Database, content: String) -> Result<TodoItem> {
    let mut item = TodoItem { id: None, content };

    let res = todos(db).insert_one(&item).await?;
    item.id = res.inserted_id.as_object_id();

    Ok(item)
}

pub async fn list_todos(db: &Database) -> Result<Vec<TodoItem>> {
    todos(db).find(doc! {}).await?.try_collect().await
}

pub async fn delete_todo(db: &Database, id: ObjectId) -> Result<bool> {
    let res = todos(db).delete_one(doc! { "_id": id }).await?;
    Ok(res.deleted_count > 0)
}
