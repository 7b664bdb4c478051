//! The safe-zone index: build once from a file, then answer point queries.
//!
//! # Build
//!
//! The file is scanned line by line.  A `Safe zone for agent group N:` line
//! declares the current group; a `Temporal graph start` line hands the
//! reader to [`read_temporal_graph`] for that group.  Groups must arrive as
//! 0, 1, 2, … with no gaps, and every group must describe exactly
//! `num_vertices` vertices.  Any violation aborts the build; there is no
//! partially built index.
//!
//! # Query
//!
//! Groups are checked in ascending id order.  The first group whose
//! intervals contain the timestamp owns the vertex.  Later matching groups
//! are reported as conflicts (logged by [`SafeZoneIndex::get_safe_agent_group`],
//! returned by [`SafeZoneIndex::lookup`]) and never override the owner.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sz_core::{AgentGroupId, Timestamp, VertexId};

use crate::lookup::{SortedIntervals, build_group_tables};
use crate::parser::{Marker, classify};
use crate::{
    GroupSafeZones, IndexConfig, LineReader, LookupMode, UnreadablePolicy, ZoneError,
    ZoneResult, read_temporal_graph,
};

// ── GroupLookup ───────────────────────────────────────────────────────────────

/// Full answer to a point query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupLookup {
    /// First group (by id) whose intervals contain the timestamp.
    pub owner:     Option<AgentGroupId>,
    /// Every further group that also contains it, in id order.
    pub conflicts: Vec<AgentGroupId>,
}

impl GroupLookup {
    pub fn has_conflict(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

enum Strategy {
    Linear,
    /// `[group][vertex]` tables.
    Sorted(Vec<Vec<SortedIntervals>>),
}

// ── SafeZoneIndex ─────────────────────────────────────────────────────────────

/// Agent-group safe zones for every vertex of a graph.
///
/// Immutable after construction, so `&SafeZoneIndex` can be shared freely
/// across threads.
pub struct SafeZoneIndex {
    /// Indexed by `AgentGroupId`; ids are contiguous from 0.
    groups:       Vec<GroupSafeZones>,
    num_vertices: usize,
    strategy:     Strategy,
}

impl SafeZoneIndex {
    /// An index with no agent groups: every query answers `None`.
    pub fn empty(num_vertices: usize) -> Self {
        Self { groups: Vec::new(), num_vertices, strategy: Strategy::Linear }
    }

    /// Build from `path` with the default [`IndexConfig`].
    ///
    /// A file that cannot be opened is not an error: a warning is logged and
    /// the index is empty.
    pub fn build(path: impl AsRef<Path>, num_vertices: usize) -> ZoneResult<Self> {
        Self::build_with(path, num_vertices, &IndexConfig::default())
    }

    pub fn build_with(
        path: impl AsRef<Path>,
        num_vertices: usize,
        config: &IndexConfig,
    ) -> ZoneResult<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => match config.unreadable {
                UnreadablePolicy::Fail => return Err(ZoneError::Io(e)),
                UnreadablePolicy::Empty => {
                    log::warn!("failed to load safe zones from {}: {e}", path.display());
                    return Ok(Self::empty(num_vertices));
                }
            },
        };
        Self::from_reader(BufReader::new(file), num_vertices, config)
    }

    /// Like [`build_with`](Self::build_with) but reads from any `BufRead`.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or for files already
    /// held in memory.
    pub fn from_reader<R: BufRead>(
        reader: R,
        num_vertices: usize,
        config: &IndexConfig,
    ) -> ZoneResult<Self> {
        let mut lines = LineReader::new(reader);
        let mut groups: Vec<GroupSafeZones> = Vec::new();
        let mut current: Option<AgentGroupId> = None;
        let mut last: Option<AgentGroupId> = None;

        while let Some(line) = lines.next_line()? {
            let number = line.number;
            match classify(line)? {
                Marker::Other => {}
                Marker::GroupHeader(id) => current = Some(id),
                Marker::BlockStart => {
                    let group = current.ok_or(ZoneError::GroupUndeclared { line: number })?;
                    let expected = last.map_or(AgentGroupId(0), AgentGroupId::next);
                    if group != expected {
                        return Err(ZoneError::GroupOutOfSequence { expected, found: group, line: number });
                    }

                    let zones = read_temporal_graph(&mut lines, config.strictness)?;
                    if zones.len() != num_vertices {
                        return Err(ZoneError::VertexCountMismatch {
                            group,
                            expected: num_vertices,
                            found:    zones.len(),
                        });
                    }
                    groups.push(zones);
                    last = Some(group);
                }
            }
        }

        let strategy = match config.lookup {
            LookupMode::Linear => Strategy::Linear,
            LookupMode::Sorted => Strategy::Sorted(groups.iter().map(build_group_tables).collect()),
        };
        log::info!(
            "loaded safe zones for {} agent groups over {} vertices ({} lines)",
            groups.len(),
            num_vertices,
            lines.line_no(),
        );
        Ok(Self { groups, num_vertices, strategy })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of agent groups.  Their ids are exactly `0..n`.
    pub fn get_num_agent_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, id: AgentGroupId) -> Option<&GroupSafeZones> {
        self.groups.get(id.index())
    }

    /// All groups in id order.
    pub fn groups(&self) -> impl Iterator<Item = (AgentGroupId, &GroupSafeZones)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, zones)| (AgentGroupId(i as u32), zones))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The agent group allowed on `vertex` at `t`, or `None`.
    ///
    /// If more than one group claims the slot, a warning naming each extra
    /// group is logged and the lowest id still wins.
    pub fn get_safe_agent_group(
        &self,
        vertex: VertexId,
        t: Timestamp,
    ) -> ZoneResult<Option<AgentGroupId>> {
        self.check_vertex(vertex)?;
        Ok(self.owner_at(vertex.index(), t))
    }

    /// Owner plus conflicting groups, without logging.
    pub fn lookup(&self, vertex: VertexId, t: Timestamp) -> ZoneResult<GroupLookup> {
        self.check_vertex(vertex)?;
        let mut hits = self.matching_groups(vertex.index(), t);
        let owner = hits.next();
        Ok(GroupLookup { owner, conflicts: hits.collect() })
    }

    /// Owner of every vertex at `t`, indexed by `VertexId`.
    ///
    /// This is the per-frame query a renderer issues.  Conflicts are logged
    /// the same way as in [`get_safe_agent_group`](Self::get_safe_agent_group).
    pub fn owners_at(&self, t: Timestamp) -> Vec<Option<AgentGroupId>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..self.num_vertices)
                .into_par_iter()
                .map(|v| self.owner_at(v, t))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.num_vertices).map(|v| self.owner_at(v, t)).collect()
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_vertex(&self, vertex: VertexId) -> ZoneResult<()> {
        if vertex.index() >= self.num_vertices {
            return Err(ZoneError::VertexOutOfRange { vertex, num_vertices: self.num_vertices });
        }
        Ok(())
    }

    /// `vertex` must already be range-checked.
    fn owner_at(&self, vertex: usize, t: Timestamp) -> Option<AgentGroupId> {
        let mut hits = self.matching_groups(vertex, t);
        let owner = hits.next()?;
        for other in hits {
            log::warn!(
                "multiple safe zones for vertex {vertex} at {t}: ignoring agent group {other}, \
                 returning first found agent group {owner}"
            );
        }
        Some(owner)
    }

    fn matching_groups(&self, vertex: usize, t: Timestamp) -> impl Iterator<Item = AgentGroupId> + '_ {
        (0..self.groups.len())
            .filter(move |&g| self.group_contains(g, vertex, t))
            .map(|g| AgentGroupId(g as u32))
    }

    #[inline]
    fn group_contains(&self, group: usize, vertex: usize, t: Timestamp) -> bool {
        match &self.strategy {
            Strategy::Linear => self.groups[group].as_slice()[vertex].contains(t),
            Strategy::Sorted(tables) => tables[group][vertex].contains(t),
        }
    }
}
