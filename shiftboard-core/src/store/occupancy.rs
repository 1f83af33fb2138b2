use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::models::DailyOccupancy;

/// Date-indexed occupancy series. One record per date, enforced at write
/// time: `set` on an existing date replaces the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyBook {
    days: BTreeMap<NaiveDate, DailyOccupancy>,
}

impl OccupancyBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn set(&mut self, record: DailyOccupancy) {
        if self.days.insert(record.date, record).is_some() {
            tracing::debug!("replaced existing occupancy record");
        }
    }

    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.days.remove(&date).is_some()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyOccupancy> {
        self.days.get(&date)
    }

    pub fn percentage_for(&self, date: NaiveDate) -> Option<u8> {
        self.days.get(&date).map(|d| d.percentage)
    }

    /// Chronological slice for dashboard views (e.g. the current week).
    pub fn range(&self, span: RangeInclusive<NaiveDate>) -> impl Iterator<Item = &DailyOccupancy> {
        self.days.range(span).map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyOccupancy> {
        self.days.values()
    }
}
