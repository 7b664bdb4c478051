//! Display colours for agent groups.
//!
//! A `GroupPalette` is built once from the index's group count and handed to
//! whatever draws the graph.  It is plain immutable data; there is no global
//! colour table.

use std::fmt;

use sz_core::AgentGroupId;

use crate::SafeZoneIndex;

/// 8-bit RGB colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One colour per agent group, indexed by `AgentGroupId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupPalette {
    colors: Vec<Rgb>,
}

impl GroupPalette {
    /// Group `i` gets channel values `(k*50, k*80, k*30) mod 256` with
    /// `k = i + 1`, which keeps neighbouring ids visually distinct.
    pub fn new(num_groups: usize) -> Self {
        let colors = (1..=num_groups as u64)
            .map(|k| Rgb::new((k * 50 % 256) as u8, (k * 80 % 256) as u8, (k * 30 % 256) as u8))
            .collect();
        Self { colors }
    }

    pub fn for_index(index: &SafeZoneIndex) -> Self {
        Self::new(index.get_num_agent_groups())
    }

    /// Colour for `group`, or `None` if the palette has no such group.
    pub fn color(&self, group: AgentGroupId) -> Option<Rgb> {
        self.colors.get(group.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
