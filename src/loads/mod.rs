//! Load definitions and equivalent end-load computation

mod equivalent;
mod load_type;
mod member_load;
mod nodal_load;

pub use equivalent::{equivalent_global_loads, equivalent_local_loads};
pub use load_type::{LoadKind, LoadType};
pub use member_load::MemberLoad;
pub use nodal_load::NodalLoad;
