use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date occupancy snapshot used as shift context. Percentage is expected
/// in 0..=100 but not enforced, matching the rest of the system's tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOccupancy {
    pub date: NaiveDate,
    pub percentage: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_high_season: bool,
}
