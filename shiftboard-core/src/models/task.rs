use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-shift instance of a task template. Label and category are copied at
/// instantiation time, not live references; the task is owned exclusively by
/// the shift that instantiated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub label: String,
    pub category: String,
    pub is_completed: bool,
    pub notes: Option<String>,
    /// Set when the task is ticked, cleared when it is unticked.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Task {
    pub fn from_template(template: &super::TaskTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: template.label.clone(),
            category: template.category.clone(),
            is_completed: false,
            notes: None,
            timestamp: None,
        }
    }
}
