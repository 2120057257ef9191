//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::math::{Mat, Vec6, Vector};

/// Everything a linear static run produces
///
/// Member force lists are ordered to match member order in the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Assembled global stiffness matrix (N_dof x N_dof)
    pub stiffness: Mat,
    /// Assembled global load vector
    pub loads: Vector,
    /// Solved global displacement vector
    pub displacements: Vector,
    /// Reactions at restrained DOFs (zero elsewhere)
    pub reactions: Vector,
    /// Member end forces in global coordinates
    pub member_forces_global: Vec<Vec6>,
    /// Member end forces in local coordinates (Ni, Qi, Mi, Nj, Qj, Mj)
    pub member_forces_local: Vec<Vec6>,
}

impl AnalysisResults {
    /// Displacement triple of a node (1-based id)
    pub fn node_displacement(&self, node_id: usize) -> Option<NodeDisplacement> {
        let base = node_id.checked_sub(1)? * 3;
        if base + 2 >= self.displacements.len() {
            return None;
        }
        Some(NodeDisplacement {
            dx: self.displacements[base],
            dy: self.displacements[base + 1],
            rz: self.displacements[base + 2],
        })
    }

    /// Reaction triple of a node (1-based id); zero for unrestrained DOFs
    pub fn node_reaction(&self, node_id: usize) -> Option<NodeReaction> {
        let base = node_id.checked_sub(1)? * 3;
        if base + 2 >= self.reactions.len() {
            return None;
        }
        Some(NodeReaction {
            fx: self.reactions[base],
            fy: self.reactions[base + 1],
            mz: self.reactions[base + 2],
        })
    }

    /// Named local end forces of the member at `position` in model order
    pub fn member_end_forces(&self, position: usize) -> Option<MemberEndForces> {
        self.member_forces_local
            .get(position)
            .map(MemberEndForces::from_local)
    }
}

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Translation in global X
    pub dx: f64,
    /// Translation in global Y
    pub dy: f64,
    /// Rotation about global Z
    pub rz: f64,
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeReaction {
    /// Reaction force in global X
    pub fx: f64,
    /// Reaction force in global Y
    pub fy: f64,
    /// Reaction moment about global Z
    pub mz: f64,
}

/// Local end forces of a member with named components
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberEndForces {
    /// Axial force at the i end
    pub axial_i: f64,
    /// Shear force at the i end
    pub shear_i: f64,
    /// Bending moment at the i end
    pub moment_i: f64,
    /// Axial force at the j end
    pub axial_j: f64,
    /// Shear force at the j end
    pub shear_j: f64,
    /// Bending moment at the j end
    pub moment_j: f64,
}

impl MemberEndForces {
    /// Build from a local end-force 6-vector (Ni, Qi, Mi, Nj, Qj, Mj)
    pub fn from_local(forces: &Vec6) -> Self {
        Self {
            axial_i: forces[0],
            shear_i: forces[1],
            moment_i: forces[2],
            axial_j: forces[3],
            shear_j: forces[4],
            moment_j: forces[5],
        }
    }
}
