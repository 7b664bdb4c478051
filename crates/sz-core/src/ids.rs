//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash`.  The inner integer is `pub` so callers
//! can build them from literals, but indexing into per-vertex and per-group
//! `Vec`s should go through `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a graph vertex, valid in `0..num_vertices`.
    pub struct VertexId(u32);
}

typed_id! {
    /// Identifier of an agent group.  Groups in an index are numbered
    /// contiguously from 0 in the order they appear in the source file.
    pub struct AgentGroupId(u32);
}

impl AgentGroupId {
    /// The id that must follow `self` in a well-formed safe-zone file.
    #[inline]
    pub fn next(self) -> AgentGroupId {
        AgentGroupId(self.0 + 1)
    }
}
