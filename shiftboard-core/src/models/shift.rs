use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Task;

/// The single current shift session: which tasks apply, who is on duty, and
/// the occupancy context captured when the session was derived.
///
/// `tasks` is a snapshot, not a live view — changing templates, categories,
/// or shift types afterwards does not alter an existing `ShiftData` until a
/// new one is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftData {
    pub id: Uuid,
    pub shift_type: String,
    /// Display string, e.g. "21 August 2026".
    pub date: String,
    pub tasks: Vec<Task>,
    pub status: ShiftStatus,
    /// Snapshot of the assigned user's display name, not a live reference.
    pub agent_name: String,
    /// Snapshot occupancy percentage.
    pub occupancy: u8,
    /// Free-text handover notes for the whole shift.
    pub notes: String,
}

impl ShiftData {
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Active,
    Completed,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}
