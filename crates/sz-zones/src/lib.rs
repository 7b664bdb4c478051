//! `sz-zones` — safe-zone file parsing and the agent-group reservation index.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`zones`]   | `VertexIntervals`, `GroupSafeZones`                         |
//! | [`parser`]  | `LineReader`, `read_temporal_graph`                         |
//! | [`index`]   | `SafeZoneIndex`, `GroupLookup`                              |
//! | [`lookup`]  | sorted containment tables for `LookupMode::Sorted`          |
//! | [`config`]  | `IndexConfig`, `Strictness`, `UnreadablePolicy`, `LookupMode` |
//! | [`palette`] | `GroupPalette`, `Rgb`                                       |
//! | [`error`]   | `ZoneError`, `ZoneResult<T>`                                |
//!
//! # File format (summary)
//!
//! ```text
//! Safe zone for agent group 0:
//! Temporal graph start
//! {[0,4][9,12]}{}{[3,3]}
//! Temporal graph end
//! Safe zone for agent group 1:
//! Temporal graph start
//! ...
//! Temporal graph end
//! ```
//!
//! Each `{...}` is one vertex in id order; each `[s,e]` inside it is a closed
//! interval of timestamps during which that vertex belongs to the group.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `owners_at` fans out over vertices with Rayon.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and core types. |

pub mod config;
pub mod error;
pub mod index;
pub mod lookup;
pub mod palette;
pub mod parser;
pub mod zones;


pub use config::{IndexConfig, LookupMode, Strictness, UnreadablePolicy};
pub use error::{ZoneError, ZoneResult};
pub use index::{GroupLookup, SafeZoneIndex};
pub use palette::{GroupPalette, Rgb};
pub use parser::{LineReader, read_temporal_graph};
pub use zones::{GroupSafeZones, VertexIntervals};
