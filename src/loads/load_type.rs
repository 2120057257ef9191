//! Load types shared across member load assignments

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Kind of member load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadKind {
    /// Line load between two positions along the member
    Distributed,
    /// Concentrated load at a fractional position along the member
    Point,
}

impl LoadKind {
    /// Resolve a numeric kind code (1 = distributed, 2 = point)
    ///
    /// Unknown codes fail with `UnsupportedLoadType` rather than defaulting.
    pub fn from_code(code: u8) -> FrameResult<Self> {
        match code {
            1 => Ok(Self::Distributed),
            2 => Ok(Self::Point),
            other => Err(FrameError::UnsupportedLoadType(other)),
        }
    }

    /// Numeric code for this kind
    pub fn code(self) -> u8 {
        match self {
            Self::Distributed => 1,
            Self::Point => 2,
        }
    }
}

/// A reusable load definition, assigned to members through `MemberLoad`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadType {
    /// Unique identifier
    pub id: usize,
    /// Kind discriminant
    pub kind: LoadKind,
    /// Distributed: absolute start position along the member.
    /// Point: position as a fraction (0..=1) of the member length.
    pub l1: f64,
    /// Distributed: absolute end position along the member.
    /// Unused for point loads.
    pub l2: f64,
    /// Primary intensity (force per length) or point magnitude
    pub q1: f64,
    /// Secondary intensity, reserved for linearly varying distributed
    /// loads; the calculator currently uses q1 throughout
    pub q2: f64,
    /// Direction of application in global degrees
    pub angle: f64,
}

impl LoadType {
    /// Create a uniform distributed load between two positions
    pub fn distributed(id: usize, l1: f64, l2: f64, q: f64, angle: f64) -> Self {
        Self {
            id,
            kind: LoadKind::Distributed,
            l1,
            l2,
            q1: q,
            q2: q,
            angle,
        }
    }

    /// Create a point load at a fractional position (0..=1) along the member
    pub fn point(id: usize, fraction: f64, magnitude: f64, angle: f64) -> Self {
        Self {
            id,
            kind: LoadKind::Point,
            l1: fraction,
            l2: 0.0,
            q1: magnitude,
            q2: 0.0,
            angle,
        }
    }
}
