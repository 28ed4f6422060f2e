use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// The editable part of a task. Everything except the id, which only the
/// store assigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub date: String,
}

impl TaskFields {
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            date: self.date,
        }
    }
}

impl Task {
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            is_completed: self.is_completed,
            date: self.date.clone(),
        }
    }

    /// Full replacement of the editable fields; the id is kept.
    pub fn with_fields(&self, fields: TaskFields) -> Task {
        fields.into_task(self.id)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

pub fn seed_fields() -> Vec<TaskFields> {
    vec![
        TaskFields {
            title: "Gym".to_string(),
            description: "Go to gym for fitness".to_string(),
            is_completed: false,
            date: "2025-08-20".to_string(),
        },
        TaskFields {
            title: "Study".to_string(),
            description: "I will Study at 9 O'clock.".to_string(),
            is_completed: true,
            date: "2025-08-22".to_string(),
        },
    ]
}
