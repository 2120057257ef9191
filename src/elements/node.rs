//! Node - a joint of the plane frame

use serde::{Deserialize, Serialize};

/// A joint in the frame carrying three degrees of freedom:
/// x-translation, y-translation and z-rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 1-based identifier; node ids must be dense (1..N with no gaps)
    pub id: usize,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Restraint flags per DOF [dx, dy, rz]; all-false means unrestrained
    pub restraints: [bool; 3],
    /// Prescribed displacement per DOF, honored where the restraint flag is set
    pub prescribed: [f64; 3],
}

impl Node {
    /// Create a free (unrestrained) node at the given coordinates
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            restraints: [false; 3],
            prescribed: [0.0; 3],
        }
    }

    /// Create a fully fixed node (all three DOFs restrained)
    pub fn fixed(id: usize, x: f64, y: f64) -> Self {
        Self {
            restraints: [true; 3],
            ..Self::new(id, x, y)
        }
    }

    /// Create a pinned node (translations restrained, rotation free)
    pub fn pinned(id: usize, x: f64, y: f64) -> Self {
        Self {
            restraints: [true, true, false],
            ..Self::new(id, x, y)
        }
    }

    /// Create a node with specific restraint flags [dx, dy, rz]
    pub fn with_restraints(id: usize, x: f64, y: f64, restraints: [bool; 3]) -> Self {
        Self {
            restraints,
            ..Self::new(id, x, y)
        }
    }

    /// Set prescribed displacement values (support settlement)
    pub fn with_prescribed(mut self, prescribed: [f64; 3]) -> Self {
        self.prescribed = prescribed;
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// A node supports load transfer if any of its DOFs is restrained
    pub fn is_supported(&self) -> bool {
        self.restraints.iter().any(|&r| r)
    }

    /// 0-based offset of this node's first DOF in the global system
    pub fn dof_base(&self) -> usize {
        (self.id - 1) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1, 1.0, 2.0);
        assert_eq!(node.coords(), [1.0, 2.0]);
        assert!(!node.is_supported());
    }

    #[test]
    fn test_fixed_and_pinned() {
        assert_eq!(Node::fixed(1, 0.0, 0.0).restraints, [true, true, true]);
        assert_eq!(Node::pinned(1, 0.0, 0.0).restraints, [true, true, false]);
    }

    #[test]
    fn test_any_restraint_counts_as_supported() {
        let node = Node::with_restraints(2, 0.0, 0.0, [false, false, true]);
        assert!(node.is_supported());
    }

    #[test]
    fn test_dof_base_is_zero_based() {
        assert_eq!(Node::new(1, 0.0, 0.0).dof_base(), 0);
        assert_eq!(Node::new(4, 0.0, 0.0).dof_base(), 9);
    }

    #[test]
    fn test_prescribed_settlement() {
        let node = Node::fixed(1, 0.0, 0.0).with_prescribed([0.0, -0.01, 0.0]);
        assert_eq!(node.prescribed[1], -0.01);
    }
}
