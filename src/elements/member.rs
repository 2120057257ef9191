//! Member - 2D frame element (beam/column)

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};
use crate::math::{self, Mat6};

/// A plane-frame member with a rectangular cross section
///
/// Members reference their end nodes by id; the model resolves them. The
/// length and orientation angle are derived quantities populated by
/// `Model::compute_geometry` - every stiffness or load operation requires
/// them to be set and fails with `GeometryNotComputed` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: usize,
    /// Id of the start (i) node
    pub i_node: usize,
    /// Id of the end (j) node
    pub j_node: usize,
    /// Modulus of elasticity
    pub e: f64,
    /// Section base
    pub b: f64,
    /// Section height
    pub h: f64,
    /// Moment release at the i end (declared; not yet consumed by the
    /// stiffness formulation in this version)
    pub hinge_i: bool,
    /// Moment release at the j end
    pub hinge_j: bool,

    /// Length computed from node coordinates
    #[serde(skip)]
    pub(crate) length: Option<f64>,

    /// Orientation angle in degrees, range (-180, 180]
    #[serde(skip)]
    pub(crate) angle: Option<f64>,
}

impl Member {
    /// Create a new member between two nodes
    pub fn new(id: usize, i_node: usize, j_node: usize, e: f64, b: f64, h: f64) -> Self {
        Self {
            id,
            i_node,
            j_node,
            e,
            b,
            h,
            hinge_i: false,
            hinge_j: false,
            length: None,
            angle: None,
        }
    }

    /// Declare moment releases at the member ends
    pub fn with_hinges(mut self, hinge_i: bool, hinge_j: bool) -> Self {
        self.hinge_i = hinge_i;
        self.hinge_j = hinge_j;
        self
    }

    /// Cross-sectional area A = b·h
    pub fn area(&self) -> f64 {
        self.b * self.h
    }

    /// Second moment of area I = b·h³/12
    pub fn inertia(&self) -> f64 {
        self.b * self.h.powi(3) / 12.0
    }

    /// Get the member length, failing if geometry has not been computed
    pub fn length(&self) -> FrameResult<f64> {
        self.length.ok_or(FrameError::GeometryNotComputed(self.id))
    }

    /// Get the orientation angle in degrees, failing if geometry has not
    /// been computed
    pub fn angle(&self) -> FrameResult<f64> {
        self.angle.ok_or(FrameError::GeometryNotComputed(self.id))
    }

    /// Store length and orientation from the end node coordinates,
    /// returning the computed length
    pub(crate) fn set_geometry(&mut self, i_coords: [f64; 2], j_coords: [f64; 2]) -> f64 {
        let dx = j_coords[0] - i_coords[0];
        let dy = j_coords[1] - i_coords[1];
        let length = dx.hypot(dy);
        self.length = Some(length);
        self.angle = Some(dy.atan2(dx).to_degrees());
        length
    }

    /// Rotation matrix mapping global to local bases for this member
    pub fn rotation_matrix(&self) -> FrameResult<Mat6> {
        Ok(math::member_rotation_matrix(self.angle()?))
    }

    /// Local 6x6 stiffness matrix
    pub fn local_stiffness(&self) -> FrameResult<Mat6> {
        Ok(math::member_local_stiffness(
            self.e,
            self.area(),
            self.inertia(),
            self.length()?,
        ))
    }

    /// Global 6x6 stiffness matrix: Rᵀ · K_local · R
    ///
    /// The result is symmetric to floating-point tolerance for any valid
    /// member.
    pub fn global_stiffness(&self) -> FrameResult<Mat6> {
        let r = self.rotation_matrix()?;
        Ok(r.transpose() * self.local_stiffness()? * r)
    }
}
