//! Sorted containment tables for [`LookupMode::Sorted`](crate::LookupMode).
//!
//! # Layout
//!
//! For one vertex's intervals sorted by start:
//!
//! ```text
//! starts[i] = start of the i-th interval
//! reach[i]  = max(end[0..=i])
//! ```
//!
//! `t` is covered iff the last interval with `start <= t` has `reach >= t`.
//! That is one `partition_point` plus one comparison, independent of how the
//! intervals overlap.  The stored `VertexIntervals` keep their file order;
//! these tables are a separate copy built once after parsing.

use sz_core::{SafeInterval, Timestamp};

use crate::GroupSafeZones;

/// Binary-searchable containment table for one vertex.
#[derive(Clone, Debug, Default)]
pub struct SortedIntervals {
    starts: Vec<Timestamp>,
    reach:  Vec<Timestamp>,
}

impl SortedIntervals {
    pub fn from_intervals(intervals: &[SafeInterval]) -> Self {
        let mut sorted = intervals.to_vec();
        sorted.sort_by_key(|iv| iv.start());

        let mut starts = Vec::with_capacity(sorted.len());
        let mut reach = Vec::with_capacity(sorted.len());
        let mut furthest = Timestamp::ZERO;
        for iv in &sorted {
            furthest = furthest.max(iv.end());
            starts.push(iv.start());
            reach.push(furthest);
        }
        Self { starts, reach }
    }

    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        match self.starts.partition_point(|&s| s <= t) {
            0 => false,
            n => self.reach[n - 1] >= t,
        }
    }
}

/// Per-vertex tables for one agent group, indexed by `VertexId`.
pub(crate) fn build_group_tables(zones: &GroupSafeZones) -> Vec<SortedIntervals> {
    zones
        .iter()
        .map(|v| SortedIntervals::from_intervals(v.intervals()))
        .collect()
}
