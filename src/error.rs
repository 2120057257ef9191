//! Error types for plane-frame analysis

use thiserror::Error;

/// Main error type for frame analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("member {0} used before its geometry was computed - call Model::compute_geometry first")]
    GeometryNotComputed(usize),

    #[error("member {0} has zero length (coincident end nodes)")]
    ZeroLengthMember(usize),

    #[error("load {load} on member {member}: neither end node is restrained, the load cannot be transferred to the joints")]
    InvalidLoadConfiguration { member: usize, load: usize },

    #[error("unsupported load kind code {0} (1 = distributed, 2 = point)")]
    UnsupportedLoadType(u8),

    #[error("node {0} not found in model")]
    NodeNotFound(usize),

    #[error("member {0} not found in model")]
    MemberNotFound(usize),

    #[error("load type {0} not found in model")]
    LoadTypeNotFound(usize),

    #[error("node ids must be dense and 1-based: expected {expected}, got {found}")]
    NonSequentialNodeId { expected: usize, found: usize },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: usize },

    #[error("no free degrees of freedom - every DOF is restrained")]
    NoFreeDofs,

    #[error("reduced stiffness matrix is singular or ill-conditioned; the model is under-restrained or contains coincident members (free DOFs: {free_dofs:?})")]
    StructuralInstability { free_dofs: Vec<usize> },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for frame analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
