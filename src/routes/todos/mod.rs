pub mod queries;
pub mod routes;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// MODELS

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
}

impl From<TodoItem> for TodoResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            content: item.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_content() {
        assert!(serde_json::from_str::<CreateTodo>("{}").is_err());
        assert!(serde_json::from_str::<CreateTodo>(r#"{"content": "milk"}"#).is_ok());
    }

    #[test]
    fn response_is_hex_id_plus_content() {
        let oid = ObjectId::new();
        let res = TodoResponse::from(TodoItem {
            id: Some(oid),
            content: "milk".into(),
        });

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["_id"], oid.to_hex());
        assert_eq!(json["content"], "milk");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
