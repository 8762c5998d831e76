use mongodb::bson::Document;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
}

/// Partial patch: only fields that arrive present and non-null in the
/// request body overwrite stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}

impl UpdateTask {
    /// Builds the `$set` payload from the fields that were supplied.
    /// May be empty; the caller decides what an empty patch means.
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(v) = &self.title {
            set.insert("title", v.as_str());
        }
        if let Some(v) = &self.description {
            set.insert("description", v.as_str());
        }
        if let Some(v) = &self.priority {
            set.insert("priority", v.as_str());
        }
        if let Some(v) = &self.status {
            set.insert("status", v.as_str());
        }
        if let Some(v) = &self.due_date {
            set.insert("due_date", v.as_str());
        }
        set
    }
}
