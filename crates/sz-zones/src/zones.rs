//! Per-vertex and per-group interval containers.

use sz_core::{SafeInterval, Timestamp, VertexId};

// ── VertexIntervals ───────────────────────────────────────────────────────────

/// The safe intervals of one vertex for one agent group, in file order.
///
/// No sorting or deduplication is performed; overlapping intervals are kept
/// as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexIntervals(Vec<SafeInterval>);

impl VertexIntervals {
    pub fn new(intervals: Vec<SafeInterval>) -> Self {
        Self(intervals)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: SafeInterval) {
        self.0.push(interval);
    }

    pub fn intervals(&self) -> &[SafeInterval] {
        &self.0
    }

    /// `true` if any interval contains `t`.  Stops at the first hit.
    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.0.iter().any(|iv| iv.contains(t))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SafeInterval> + '_ {
        self.0.iter()
    }
}

// ── GroupSafeZones ────────────────────────────────────────────────────────────

/// One agent group's intervals for every vertex, indexed by `VertexId`.
///
/// Once stored in a [`crate::SafeZoneIndex`] the length equals the index's
/// vertex count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSafeZones(Vec<VertexIntervals>);

impl GroupSafeZones {
    pub fn new(vertices: Vec<VertexIntervals>) -> Self {
        Self(vertices)
    }

    pub fn push(&mut self, vertex: VertexIntervals) {
        self.0.push(vertex);
    }

    /// Intervals for `vertex`, or `None` if the id is past the end.
    pub fn vertex(&self, vertex: VertexId) -> Option<&VertexIntervals> {
        self.0.get(vertex.index())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexIntervals> + '_ {
        self.0.iter()
    }

    pub(crate) fn as_slice(&self) -> &[VertexIntervals] {
        &self.0
    }
}
