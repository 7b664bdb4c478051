//! Discrete planning time.
//!
//! Safe intervals are expressed in whole timesteps of the plan being checked.
//! There is no wall-clock mapping at this layer; a timestamp is simply the
//! index of a plan step, starting at 0.

use std::fmt;

/// A discrete plan timestep.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
