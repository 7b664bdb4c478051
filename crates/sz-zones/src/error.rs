use thiserror::Error;

use sz_core::{AgentGroupId, VertexId};

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("line {line}: temporal graph starts before any agent group was declared")]
    GroupUndeclared { line: usize },

    #[error("line {line}: agent group ids must be consecutive, expected {expected} but found {found}")]
    GroupOutOfSequence {
        expected: AgentGroupId,
        found:    AgentGroupId,
        line:     usize,
    },

    #[error("safe zones of agent group {group} cover {found} vertices, expected {expected}")]
    VertexCountMismatch {
        group:    AgentGroupId,
        expected: usize,
        found:    usize,
    },

    #[error("vertex {vertex} out of range, graph has {num_vertices} vertices")]
    VertexOutOfRange { vertex: VertexId, num_vertices: usize },

    #[error("safe zone format error at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZoneError {
    /// `true` for the two ways a file can break group ordering: a block with
    /// no declared group, or a group id that skips ahead or repeats.
    pub fn is_sequence_error(&self) -> bool {
        matches!(self, Self::GroupUndeclared { .. } | Self::GroupOutOfSequence { .. })
    }
}

pub type ZoneResult<T> = Result<T, ZoneError>;
