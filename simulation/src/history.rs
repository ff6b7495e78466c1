//! Yearly population records
//!
//! Both engines append one record per simulated year. Records are never
//! edited once written.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub year: u32,
    pub ordinary_count: u64,
    pub bio_count: u64,
    pub total_count: u64,
}

impl HistoryRecord {
    /// The total is always derived from the two type counts
    pub fn new(year: u32, ordinary_count: u64, bio_count: u64) -> Self {
        Self {
            year,
            ordinary_count,
            bio_count,
            total_count: ordinary_count.saturating_add(bio_count),
        }
    }
}

/// Append-only, year-ordered sequence of records
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: HistoryRecord) {
        if let Some(last) = self.records.last() {
            assert!(
                record.year > last.year,
                "history year {} must follow {}",
                record.year,
                last.year
            );
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Record for a given year, if it has been simulated
    pub fn year(&self, year: u32) -> Option<&HistoryRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
