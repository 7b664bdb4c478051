//! Closed timestamp ranges.

use std::fmt;

use crate::{SzError, SzResult, Timestamp};

/// An inclusive range `[start, end]` of timestamps during which a vertex is
/// reserved for one agent group.
///
/// `start <= end` always holds; construct through [`SafeInterval::new`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeInterval {
    start: Timestamp,
    end:   Timestamp,
}

impl SafeInterval {
    /// Build `[start, end]`.  Fails with [`SzError::InvertedInterval`] when
    /// `start > end`.
    pub fn new(start: u64, end: u64) -> SzResult<Self> {
        let (start, end) = (Timestamp(start), Timestamp(end));
        if start > end {
            return Err(SzError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Closed containment: `start <= t <= end`.
    #[inline]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }
}

impl fmt::Display for SafeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start.0, self.end.0)
    }
}
