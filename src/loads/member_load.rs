//! Member load assignments

use serde::{Deserialize, Serialize};

/// Associates a load type with a member
///
/// A member may carry any number of assignments and a load type may be
/// reused across members; their effects accumulate additively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberLoad {
    /// Id of the loaded member
    pub member_id: usize,
    /// Id of the load type applied to it
    pub load_id: usize,
}

impl MemberLoad {
    /// Create a new assignment
    pub fn new(member_id: usize, load_id: usize) -> Self {
        Self { member_id, load_id }
    }
}
