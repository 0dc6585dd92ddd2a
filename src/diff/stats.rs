//! Summary counters over a diff event sequence

use std::collections::BTreeMap;

use serde::Serialize;

use super::DiffEvent;

/// Totals for a finished comparison
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    #[serde(rename = "added")]
    pub added_count: usize,
    #[serde(rename = "removed")]
    pub removed_count: usize,
    /// Changes per field label, ordered by label
    #[serde(rename = "changed_fields")]
    pub modified_field_counts: BTreeMap<String, usize>,
}

/// Folds diff events into [`SummaryStats`]
#[derive(Debug, Default)]
pub struct DiffAggregator {
    stats: SummaryStats,
}

impl DiffAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one event
    pub fn observe(&mut self, event: &DiffEvent) {
        match event {
            DiffEvent::Added { .. } => self.stats.added_count += 1,
            DiffEvent::Removed { .. } => self.stats.removed_count += 1,
            DiffEvent::Modified { field_changes, .. } => {
                for change in field_changes {
                    *self
                        .stats
                        .modified_field_counts
                        .entry(change.label.to_string())
                        .or_default() += 1;
                }
            }
            DiffEvent::Incompatible { .. } => {}
        }
    }

    pub fn finish(self) -> SummaryStats {
        self.stats
    }
}
