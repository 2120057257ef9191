//! Linear static analysis pipeline
//!
//! Geometry → element stiffness and equivalent loads → assembly → boundary
//! condition solve → member force recovery. Each run derives fresh matrices
//! and vectors from the model; nothing is cached between runs.

use log::{debug, info};

use crate::elements::Member;
use crate::error::{FrameError, FrameResult};
use crate::loads::equivalent_global_loads;
use crate::math::{self, Mat, Vec6, Vector};
use crate::model::{Model, ModelIndex};
use crate::results::AnalysisResults;

/// Run the full pipeline on a model
///
/// Computes member geometry, assembles the global system, solves for the
/// unknown displacements and recovers member end forces in global and
/// local coordinates.
pub fn analyze(model: &mut Model) -> FrameResult<AnalysisResults> {
    model.compute_geometry()?;

    info!(
        "analyzing model: {} nodes, {} members, {} dofs",
        model.nodes.len(),
        model.members.len(),
        model.n_dofs()
    );

    let stiffness = assemble_stiffness(model)?;
    let loads = assemble_loads(model)?;
    let displacements = solve_displacements(model, &stiffness, &loads)?;
    let (member_forces_global, member_forces_local) =
        recover_member_forces(model, &displacements)?;
    let reactions = compute_reactions(model, &member_forces_global);

    Ok(AnalysisResults {
        stiffness,
        loads,
        displacements,
        reactions,
        member_forces_global,
        member_forces_local,
    })
}

/// Six global DOF indices of a member, three per end node
fn member_dofs(member: &Member) -> [usize; 6] {
    let i = (member.i_node - 1) * 3;
    let j = (member.j_node - 1) * 3;
    [i, i + 1, i + 2, j, j + 1, j + 2]
}

/// Assemble the global stiffness matrix
///
/// Scatter-adds each member's global 6x6 stiffness at the DOFs of its two
/// end nodes. Addition is commutative, so member order does not affect the
/// result beyond floating-point rounding.
pub fn assemble_stiffness(model: &Model) -> FrameResult<Mat> {
    let n = model.n_dofs();
    let mut k = Mat::zeros(n, n);

    for member in &model.members {
        let ke = member.global_stiffness()?;
        let dofs = member_dofs(member);
        for a in 0..6 {
            for b in 0..6 {
                k[(dofs[a], dofs[b])] += ke[(a, b)];
            }
        }
    }

    Ok(k)
}

/// Assemble the global load vector
///
/// Direct nodal loads add their (fx, fy, mz) triple at the node's DOFs;
/// each member-load assignment contributes its equivalent global end-load
/// 6-vector at the member's DOFs. Multiple loads on a member accumulate.
/// Dangling member or load-type references are hard errors.
pub fn assemble_loads(model: &Model) -> FrameResult<Vector> {
    let index = ModelIndex::build(model);
    let mut f = Vector::zeros(model.n_dofs());

    for load in &model.nodal_loads {
        let base = model.node(load.node_id)?.dof_base();
        f[base] += load.fx;
        f[base + 1] += load.fy;
        f[base + 2] += load.mz;
    }

    for assignment in &model.member_loads {
        let member = index.member(model, assignment.member_id)?;
        let load_type = index.load_type(model, assignment.load_id)?;
        let i_node = model.node(member.i_node)?;
        let j_node = model.node(member.j_node)?;

        let fe = equivalent_global_loads(member, i_node, j_node, load_type)?;
        let dofs = member_dofs(member);
        for (k, &dof) in dofs.iter().enumerate() {
            f[dof] += fe[k];
        }
    }

    Ok(f)
}

/// Partition DOFs by restraint and solve the reduced system
///
/// Prescribed displacements are written into the full vector first, then
/// K_ff D_f = F_f - K_fp D_p is solved for the free DOFs. A singular or
/// ill-conditioned reduced matrix fails with `StructuralInstability`.
pub fn solve_displacements(model: &Model, k: &Mat, f: &Vector) -> FrameResult<Vector> {
    let n = model.n_dofs();

    let mut prescribed: Vec<Option<f64>> = vec![None; n];
    for node in &model.nodes {
        let base = node.dof_base();
        for i in 0..3 {
            if node.restraints[i] {
                prescribed[base + i] = Some(node.prescribed[i]);
            }
        }
    }

    let mut free = Vec::new();
    let mut fixed = Vec::new();
    let mut d = Vector::zeros(n);
    for (dof, value) in prescribed.iter().enumerate() {
        match value {
            Some(v) => {
                d[dof] = *v;
                fixed.push(dof);
            }
            None => free.push(dof),
        }
    }

    if free.is_empty() {
        return Err(FrameError::NoFreeDofs);
    }
    debug!("{} free dofs, {} prescribed", free.len(), fixed.len());

    let n_free = free.len();
    let mut k_ff = Mat::zeros(n_free, n_free);
    let mut rhs = Vector::zeros(n_free);
    for (a, &da) in free.iter().enumerate() {
        rhs[a] = f[da];
        for (b, &db) in free.iter().enumerate() {
            k_ff[(a, b)] = k[(da, db)];
        }
        for &dp in &fixed {
            rhs[a] -= k[(da, dp)] * d[dp];
        }
    }

    let d_free = math::solve_dense(&k_ff, &rhs)
        .ok_or(FrameError::StructuralInstability { free_dofs: free.clone() })?;
    for (a, &da) in free.iter().enumerate() {
        d[da] = d_free[a];
    }

    Ok(d)
}

/// Recover member end forces from the solved displacement field
///
/// Per member: F_global = K_global · D_member - A_member, where A_member
/// sums the equivalent global end loads applied to it (zero if unloaded).
/// Local forces follow by rotating with R (not Rᵀ - forces transform the
/// inverse of how stiffness does). The computation is pure: repeated calls
/// on the same displacement vector yield identical results.
pub fn recover_member_forces(
    model: &Model,
    displacements: &Vector,
) -> FrameResult<(Vec<Vec6>, Vec<Vec6>)> {
    let index = ModelIndex::build(model);
    let mut global = Vec::with_capacity(model.members.len());
    let mut local = Vec::with_capacity(model.members.len());

    for member in &model.members {
        let dofs = member_dofs(member);
        let mut d_member = Vec6::zeros();
        for (k, &dof) in dofs.iter().enumerate() {
            d_member[k] = displacements[dof];
        }

        let mut equivalent = Vec6::zeros();
        for assignment in model
            .member_loads
            .iter()
            .filter(|ml| ml.member_id == member.id)
        {
            let load_type = index.load_type(model, assignment.load_id)?;
            let i_node = model.node(member.i_node)?;
            let j_node = model.node(member.j_node)?;
            equivalent += equivalent_global_loads(member, i_node, j_node, load_type)?;
        }

        let f_global = member.global_stiffness()? * d_member - equivalent;
        let f_local = member.rotation_matrix()? * f_global;

        global.push(f_global);
        local.push(f_local);
    }

    Ok((global, local))
}

/// Reactions at restrained DOFs
///
/// Scatter of member global end forces at each node, minus the nodal loads
/// applied there, masked to restrained DOFs.
fn compute_reactions(model: &Model, member_forces_global: &[Vec6]) -> Vector {
    let mut r = Vector::zeros(model.n_dofs());

    for (member, forces) in model.members.iter().zip(member_forces_global) {
        let dofs = member_dofs(member);
        for (k, &dof) in dofs.iter().enumerate() {
            r[dof] += forces[k];
        }
    }

    for load in &model.nodal_loads {
        let base = (load.node_id - 1) * 3;
        r[base] -= load.fx;
        r[base + 1] -= load.fy;
        r[base + 2] -= load.mz;
    }

    for node in &model.nodes {
        let base = node.dof_base();
        for i in 0..3 {
            if !node.restraints[i] {
                r[base + i] = 0.0;
            }
        }
    }

    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Node;
    use crate::loads::{LoadType, MemberLoad, NodalLoad};
    use approx::assert_relative_eq;

    fn two_member_frame() -> Model {
        let mut model = Model::new();
        model.add_node(Node::fixed(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, 0.0, 3.0)).unwrap();
        model.add_node(Node::fixed(3, 4.0, 3.0)).unwrap();
        model.add_member(Member::new(1, 1, 2, 210e9, 0.2, 0.3)).unwrap();
        model.add_member(Member::new(2, 2, 3, 210e9, 0.2, 0.3)).unwrap();
        model
    }

    #[test]
    fn test_assembled_stiffness_is_symmetric() {
        let mut model = two_member_frame();
        model.compute_geometry().unwrap();
        let k = assemble_stiffness(&model).unwrap();
        assert_eq!(k.nrows(), 9);
        for i in 0..9 {
            for j in 0..9 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], max_relative = 1e-6, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_nodal_loads_land_on_their_dofs() {
        let mut model = two_member_frame();
        model.add_nodal_load(NodalLoad::new(2, 500.0, -1000.0, 250.0)).unwrap();
        model.compute_geometry().unwrap();
        let f = assemble_loads(&model).unwrap();
        assert_relative_eq!(f[3], 500.0, max_relative = 1e-12);
        assert_relative_eq!(f[4], -1000.0, max_relative = 1e-12);
        assert_relative_eq!(f[5], 250.0, max_relative = 1e-12);
    }

    #[test]
    fn test_multiple_member_loads_accumulate() {
        let mut model = two_member_frame();
        model.add_load_type(LoadType::distributed(1, 0.0, 4.0, -2.0, 90.0)).unwrap();
        model.add_member_load(MemberLoad::new(2, 1)).unwrap();
        model.add_member_load(MemberLoad::new(2, 1)).unwrap();
        model.compute_geometry().unwrap();
        let f = assemble_loads(&model).unwrap();
        // Two identical full-span UDLs on the horizontal member: each end
        // receives 2 x qL/2 in global y.
        assert_relative_eq!(f[4], -8.0, max_relative = 1e-9);
        assert_relative_eq!(f[7], -8.0, max_relative = 1e-9);
    }

    #[test]
    fn test_all_dofs_restrained_is_rejected() {
        let mut model = Model::new();
        model.add_node(Node::fixed(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::fixed(2, 3.0, 0.0)).unwrap();
        model.add_member(Member::new(1, 1, 2, 210e9, 0.2, 0.3)).unwrap();
        assert!(matches!(model.analyze(), Err(FrameError::NoFreeDofs)));
    }

    #[test]
    fn test_under_restrained_model_is_detected() {
        let mut model = Model::new();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, 3.0, 0.0)).unwrap();
        model.add_member(Member::new(1, 1, 2, 210e9, 0.2, 0.3)).unwrap();
        match model.analyze() {
            Err(FrameError::StructuralInstability { free_dofs }) => {
                assert_eq!(free_dofs.len(), 6);
            }
            other => panic!("expected instability, got {other:?}"),
        }
    }

    #[test]
    fn test_prescribed_settlement_enters_solution() {
        let mut model = Model::new();
        model
            .add_node(Node::fixed(1, 0.0, 0.0).with_prescribed([0.0, -0.01, 0.0]))
            .unwrap();
        model.add_node(Node::pinned(2, 4.0, 0.0)).unwrap();
        model.add_member(Member::new(1, 1, 2, 210e9, 0.2, 0.3)).unwrap();

        let results = model.analyze().unwrap();
        assert_relative_eq!(results.displacements[1], -0.01, max_relative = 1e-12);
        // The settlement bends the member, so the free rotation is nonzero.
        assert!(results.displacements[5].abs() > 1e-9);
    }
}
