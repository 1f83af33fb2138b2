use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Binds a user to a shift type on a specific date. The user id is not
/// checked against the user catalog; dangling references are tolerated and
/// derivation falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub shift_type: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub date: NaiveDate,
    pub shift_type: String,
    pub user_id: Uuid,
}
