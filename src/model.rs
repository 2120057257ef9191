//! Structural model - container for nodes, members and loads

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::{Member, Node};
use crate::error::{FrameError, FrameResult};
use crate::loads::{LoadType, MemberLoad, NodalLoad};
use crate::results::AnalysisResults;

/// The structural model: ordered collections with append-only mutators
///
/// Node ids must arrive densely, 1-based and gap-free, because they double
/// as DOF offsets throughout the pipeline. Member and load-type ids are
/// arbitrary but unique; they are resolved through id→index maps built once
/// per analysis run, never by positional indexing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    /// Nodes in insertion order; node `id` equals its 1-based position
    pub nodes: Vec<Node>,
    /// Members in insertion order
    pub members: Vec<Member>,
    /// Direct nodal loads
    pub nodal_loads: Vec<NodalLoad>,
    /// Member-load assignments
    pub member_loads: Vec<MemberLoad>,
    /// Reusable load definitions
    pub load_types: Vec<LoadType>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; ids must be assigned densely starting at 1
    pub fn add_node(&mut self, node: Node) -> FrameResult<()> {
        let expected = self.nodes.len() + 1;
        if node.id != expected {
            return Err(FrameError::NonSequentialNodeId {
                expected,
                found: node.id,
            });
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Add a member; both end nodes must already exist
    pub fn add_member(&mut self, member: Member) -> FrameResult<()> {
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(FrameError::DuplicateId {
                kind: "member",
                id: member.id,
            });
        }
        self.node(member.i_node)?;
        self.node(member.j_node)?;
        self.members.push(member);
        Ok(())
    }

    /// Add a reusable load type
    pub fn add_load_type(&mut self, load_type: LoadType) -> FrameResult<()> {
        if self.load_types.iter().any(|t| t.id == load_type.id) {
            return Err(FrameError::DuplicateId {
                kind: "load type",
                id: load_type.id,
            });
        }
        self.load_types.push(load_type);
        Ok(())
    }

    /// Assign a load type to a member; both references must resolve
    pub fn add_member_load(&mut self, load: MemberLoad) -> FrameResult<()> {
        self.member(load.member_id)?;
        self.load_type(load.load_id)?;
        self.member_loads.push(load);
        Ok(())
    }

    /// Add a direct nodal load
    pub fn add_nodal_load(&mut self, load: NodalLoad) -> FrameResult<()> {
        self.node(load.node_id)?;
        self.nodal_loads.push(load);
        Ok(())
    }

    /// Look up a node by id (dense ids are positional)
    pub fn node(&self, id: usize) -> FrameResult<&Node> {
        id.checked_sub(1)
            .and_then(|i| self.nodes.get(i))
            .ok_or(FrameError::NodeNotFound(id))
    }

    /// Look up a member by id
    pub fn member(&self, id: usize) -> FrameResult<&Member> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or(FrameError::MemberNotFound(id))
    }

    /// Look up a load type by id
    pub fn load_type(&self, id: usize) -> FrameResult<&LoadType> {
        self.load_types
            .iter()
            .find(|t| t.id == id)
            .ok_or(FrameError::LoadTypeNotFound(id))
    }

    /// Total number of degrees of freedom (3 per node)
    pub fn n_dofs(&self) -> usize {
        self.nodes.len() * 3
    }

    /// Compute length and orientation of every member
    ///
    /// Must run before any stiffness or equivalent-load operation.
    /// Coincident end nodes are a fatal input error.
    pub fn compute_geometry(&mut self) -> FrameResult<()> {
        for idx in 0..self.members.len() {
            let (id, i_node, j_node) = {
                let m = &self.members[idx];
                (m.id, m.i_node, m.j_node)
            };
            let i_coords = self.node(i_node)?.coords();
            let j_coords = self.node(j_node)?.coords();
            let length = self.members[idx].set_geometry(i_coords, j_coords);
            if length < 1e-10 {
                return Err(FrameError::ZeroLengthMember(id));
            }
            debug!(
                "member {}: length {:.6}, angle {:.4} deg",
                id,
                length,
                self.members[idx].angle.unwrap_or(0.0)
            );
        }
        Ok(())
    }

    /// Run the linear static analysis pipeline
    pub fn analyze(&mut self) -> FrameResult<AnalysisResults> {
        crate::analysis::analyze(self)
    }

    /// Validate cross-references and id density
    ///
    /// The add_* methods enforce this incrementally; models deserialized
    /// from JSON go through it wholesale.
    pub fn validate(&self) -> FrameResult<()> {
        for (i, node) in self.nodes.iter().enumerate() {
            if node.id != i + 1 {
                return Err(FrameError::NonSequentialNodeId {
                    expected: i + 1,
                    found: node.id,
                });
            }
        }
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.id == member.id) {
                return Err(FrameError::DuplicateId {
                    kind: "member",
                    id: member.id,
                });
            }
            self.node(member.i_node)?;
            self.node(member.j_node)?;
        }
        for (i, load_type) in self.load_types.iter().enumerate() {
            if self.load_types[..i].iter().any(|t| t.id == load_type.id) {
                return Err(FrameError::DuplicateId {
                    kind: "load type",
                    id: load_type.id,
                });
            }
        }
        for load in &self.member_loads {
            self.member(load.member_id)?;
            self.load_type(load.load_id)?;
        }
        for load in &self.nodal_loads {
            self.node(load.node_id)?;
        }
        Ok(())
    }

    /// Deserialize and validate a model from JSON
    pub fn from_json(json: &str) -> FrameResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Serialize the model to JSON
    pub fn to_json(&self) -> FrameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Id→index maps built once per analysis run
///
/// Member and load-type lookups during assembly and recovery go through
/// these maps; a miss is a hard `UnresolvedReference`-style failure, never
/// a skip.
#[derive(Debug)]
pub(crate) struct ModelIndex {
    members: HashMap<usize, usize>,
    load_types: HashMap<usize, usize>,
}

impl ModelIndex {
    pub(crate) fn build(model: &Model) -> Self {
        Self {
            members: model
                .members
                .iter()
                .enumerate()
                .map(|(i, m)| (m.id, i))
                .collect(),
            load_types: model
                .load_types
                .iter()
                .enumerate()
                .map(|(i, t)| (t.id, i))
                .collect(),
        }
    }

    pub(crate) fn member<'a>(&self, model: &'a Model, id: usize) -> FrameResult<&'a Member> {
        self.members
            .get(&id)
            .map(|&i| &model.members[i])
            .ok_or(FrameError::MemberNotFound(id))
    }

    pub(crate) fn load_type<'a>(&self, model: &'a Model, id: usize) -> FrameResult<&'a LoadType> {
        self.load_types
            .get(&id)
            .map(|&i| &model.load_types[i])
            .ok_or(FrameError::LoadTypeNotFound(id))
    }
}
