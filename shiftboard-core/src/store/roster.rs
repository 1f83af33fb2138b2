use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{NewAssignment, ShiftAssignment};

/// Date + shift-type roster, keyed by `(date, shift_type)` so at most one
/// assignment exists per slot. Assigning over an occupied slot replaces it:
/// the most recent write wins, which is the documented tie-break for the
/// ambiguous "two assignments for the same slot" case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    slots: HashMap<(NaiveDate, String), ShiftAssignment>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Upsert. Returns the id of the stored assignment.
    pub fn assign(&mut self, input: NewAssignment) -> Uuid {
        let assignment = ShiftAssignment {
            id: Uuid::new_v4(),
            date: input.date,
            shift_type: input.shift_type,
            user_id: input.user_id,
        };
        let id = assignment.id;
        let key = (assignment.date, assignment.shift_type.clone());
        if let Some(previous) = self.slots.insert(key, assignment) {
            tracing::debug!(
                date = %previous.date,
                shift_type = %previous.shift_type,
                "replaced existing roster assignment"
            );
        }
        id
    }

    pub fn unassign(&mut self, date: NaiveDate, shift_type: &str) -> bool {
        self.slots.remove(&(date, shift_type.to_string())).is_some()
    }

    pub fn get(&self, date: NaiveDate, shift_type: &str) -> Option<&ShiftAssignment> {
        self.slots.get(&(date, shift_type.to_string()))
    }

    /// All assignments on a date, ordered by shift-type name for a stable
    /// listing.
    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&ShiftAssignment> {
        let mut found: Vec<_> = self
            .slots
            .values()
            .filter(|a| a.date == date)
            .collect();
        found.sort_by(|a, b| a.shift_type.cmp(&b.shift_type));
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftAssignment> {
        self.slots.values()
    }

    /// Bulk save from the roster screen: drops everything and re-applies the
    /// given assignments through the same upsert rule.
    pub fn replace_all(&mut self, assignments: Vec<NewAssignment>) {
        self.slots.clear();
        for input in assignments {
            self.assign(input);
        }
    }
}
