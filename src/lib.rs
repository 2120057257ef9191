//! frame2d - linear static analysis of 2D plane frames
//!
//! Direct stiffness method for plane frames: build a model of nodes,
//! members, supports and loads, then solve for joint displacements and
//! member end forces. Equivalent end loads for distributed and point
//! member loads account for which end joints are restrained.
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! let mut model = Model::new();
//!
//! // Cantilever from a fixed base to a free tip
//! model.add_node(Node::fixed(1, 0.0, 0.0)).unwrap();
//! model.add_node(Node::new(2, 3.0, 4.0)).unwrap();
//! model.add_member(Member::new(1, 1, 2, 200e9, 0.3, 0.5)).unwrap();
//!
//! // Tip load in global coordinates
//! model.add_nodal_load(NodalLoad::new(2, 1000.0, -2000.0, 0.0)).unwrap();
//!
//! let results = model.analyze().unwrap();
//! assert!(results.node_displacement(2).unwrap().dy < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Member, Node};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{LoadKind, LoadType, MemberLoad, NodalLoad};
    pub use crate::model::Model;
    pub use crate::results::{AnalysisResults, MemberEndForces, NodeDisplacement, NodeReaction};
}
