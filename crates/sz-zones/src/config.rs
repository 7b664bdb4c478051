//! Index build configuration.
//!
//! The defaults reproduce the lenient behaviour every caller relies on:
//! stray text is skipped, an unreadable file yields an empty index, and
//! queries scan intervals linearly.

/// How the parser treats text it cannot read as an interval.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strictness {
    /// Only well-formed `[int,int]` tokens are read; anything else inside or
    /// between vertex blocks is skipped.  Inverted ranges are dropped.
    #[default]
    Lenient,
    /// Stray non-whitespace text, unparsable numbers, and inverted ranges
    /// inside a temporal graph block raise [`crate::ZoneError::Format`].
    Strict,
}

/// What `SafeZoneIndex::build_with` does when the file cannot be opened.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnreadablePolicy {
    /// Log a warning and return an index with zero agent groups.
    #[default]
    Empty,
    /// Return [`crate::ZoneError::Io`].
    Fail,
}

/// Containment strategy used by queries.  Both give identical answers.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupMode {
    /// Scan each vertex's intervals in file order.
    #[default]
    Linear,
    /// Precompute start-sorted tables at build time and binary-search them.
    /// Worth it when vertices carry many intervals.
    Sorted,
}

/// Options for building a [`crate::SafeZoneIndex`].
///
/// Typically left at `Default` or filled from the application's own config
/// file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexConfig {
    pub strictness: Strictness,
    pub unreadable: UnreadablePolicy,
    pub lookup:     LookupMode,
}

impl IndexConfig {
    pub fn strict() -> Self {
        Self { strictness: Strictness::Strict, ..Self::default() }
    }

    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_unreadable(mut self, unreadable: UnreadablePolicy) -> Self {
        self.unreadable = unreadable;
        self
    }
}
