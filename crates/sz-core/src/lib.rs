//! `sz-core` — foundational types for the safe-zone reservation index.
//!
//! This crate is a dependency of every other `sz-*` crate.  It has no `sz-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`ids`]        | `VertexId`, `AgentGroupId`                        |
//! | [`time`]       | `Timestamp`                                       |
//! | [`interval`]   | `SafeInterval`                                    |
//! | [`error`]      | `SzError`, `SzResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod interval;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SzError, SzResult};
pub use ids::{AgentGroupId, VertexId};
pub use interval::SafeInterval;
pub use time::Timestamp;
