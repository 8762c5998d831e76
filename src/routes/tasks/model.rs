use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a task document. `_id` is absent until the store
/// generates one at insert time.
#[derive(Debug, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub status: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a task: identical to [`Task`] except the id is rendered
/// as its hex string. The conversion boundary lives here so queries work
/// with native `ObjectId` throughout.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: task.title,
            description: task.description,
            priority: task.priority,
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: Option<ObjectId>) -> Task {
        Task {
            id,
            title: "A".into(),
            description: "B".into(),
            priority: "low".into(),
            due_date: "2024-01-01".into(),
            status: "Pending".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn response_renders_id_as_hex() {
        let oid = ObjectId::new();
        let res = TaskResponse::from(sample(Some(oid)));

        assert_eq!(res.id, oid.to_hex());
        assert_eq!(res.id.len(), 24);
        assert_eq!(res.status, "Pending");
    }

    #[test]
    fn response_serializes_with_underscore_id_key() {
        let res = TaskResponse::from(sample(Some(ObjectId::new())));
        let json = serde_json::to_value(&res).unwrap();

        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn unsaved_task_omits_id_when_serialized() {
        let doc = mongodb::bson::to_document(&sample(None)).unwrap();
        assert!(!doc.contains_key("_id"));
    }
}
