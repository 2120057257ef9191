//! Nodal loads - forces and moments applied directly to joints

use serde::{Deserialize, Serialize};

/// A force/moment triple applied directly at a node, in global coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodalLoad {
    /// Id of the loaded node
    pub node_id: usize,
    /// Force in global X
    pub fx: f64,
    /// Force in global Y
    pub fy: f64,
    /// Moment about global Z
    pub mz: f64,
}

impl NodalLoad {
    /// Create a new nodal load with all components
    pub fn new(node_id: usize, fx: f64, fy: f64, mz: f64) -> Self {
        Self { node_id, fx, fy, mz }
    }

    /// Create a load in global X only
    pub fn fx(node_id: usize, value: f64) -> Self {
        Self::new(node_id, value, 0.0, 0.0)
    }

    /// Create a load in global Y only
    pub fn fy(node_id: usize, value: f64) -> Self {
        Self::new(node_id, 0.0, value, 0.0)
    }

    /// Create a moment about global Z only
    pub fn mz(node_id: usize, value: f64) -> Self {
        Self::new(node_id, 0.0, 0.0, value)
    }

    /// Get the load as an array [fx, fy, mz]
    pub fn vector(&self) -> [f64; 3] {
        [self.fx, self.fy, self.mz]
    }
}
