//! Equivalent end loads for distributed and point member loads
//!
//! A load acting between the ends of a member is replaced by statically
//! equivalent actions at its two end joints, in the member's local axes.
//! Which formula applies depends on which end nodes carry restraints: a
//! span anchored at one end concentrates its whole reaction there, while a
//! span restrained at both ends uses the classical fixed-end actions.
//!
//! Sign convention: the load's global direction angle is rotated into the
//! member frame by subtracting the member orientation, then decomposed by
//! signed projection into axial (cos) and transverse (sin) components.

use crate::elements::{Member, Node};
use crate::error::{FrameError, FrameResult};
use crate::loads::{LoadKind, LoadType};
use crate::math::{self, Vec6};

/// Compute the equivalent end actions in member-local coordinates
///
/// Returns (Ni, Qi, Mi, Nj, Qj, Mj). Fails with `InvalidLoadConfiguration`
/// when neither end node is restrained - such a load has no joints to
/// transfer to and must not silently become a zero vector.
pub fn equivalent_local_loads(
    member: &Member,
    i_node: &Node,
    j_node: &Node,
    load: &LoadType,
) -> FrameResult<Vec6> {
    let length = member.length()?;
    let theta = member.angle()?;

    let i_supported = i_node.is_supported();
    let j_supported = j_node.is_supported();
    if !i_supported && !j_supported {
        return Err(FrameError::InvalidLoadConfiguration {
            member: member.id,
            load: load.id,
        });
    }

    // Rotate the global load direction into the member frame before
    // decomposing into axial and transverse intensities.
    let (sin_a, cos_a) = (load.angle - theta).to_radians().sin_cos();

    if i_supported && j_supported {
        return Ok(match load.kind {
            LoadKind::Distributed => {
                fixed_fixed_uniform(load.q1, load.l1, load.l2, length, cos_a, sin_a)
            }
            LoadKind::Point => fixed_fixed_point(load.q1, load.l1 * length, length, cos_a, sin_a),
        });
    }

    // One restrained end: the whole reaction concentrates there. Force is
    // the load resultant; moment is the transverse component times the
    // lever arm to the load centroid.
    let (resultant, centroid) = match load.kind {
        LoadKind::Distributed => (
            load.q1 * (load.l2 - load.l1),
            (load.l1 + load.l2) / 2.0,
        ),
        LoadKind::Point => (load.q1, load.l1 * length),
    };
    let axial = resultant * cos_a;
    let transverse = resultant * sin_a;

    let fe = if i_supported {
        Vec6::new(axial, transverse, transverse * centroid, 0.0, 0.0, 0.0)
    } else {
        // Mirror case: lever measured back from the j end is negative.
        Vec6::new(
            0.0,
            0.0,
            0.0,
            axial,
            transverse,
            transverse * (centroid - length),
        )
    };
    Ok(fe)
}

/// Equivalent end actions rotated to the global frame: Rᵀ · local
pub fn equivalent_global_loads(
    member: &Member,
    i_node: &Node,
    j_node: &Node,
    load: &LoadType,
) -> FrameResult<Vec6> {
    let local = equivalent_local_loads(member, i_node, j_node, load)?;
    Ok(member.rotation_matrix()?.transpose() * local)
}

/// Fixed-fixed actions of a uniform load over [x1, x2] of a span `l`
///
/// The transverse component weights the cubic Hermite shape-function
/// integrals (full span reduces to qL/2 forces and ±qL²/12 moments); the
/// axial component splits by the linear shape functions.
fn fixed_fixed_uniform(q: f64, x1: f64, x2: f64, l: f64, cos_a: f64, sin_a: f64) -> Vec6 {
    let w_axial = q * cos_a;
    let w_transverse = q * sin_a;

    let [n1, n2, n3, n4] = math::hermite_integrals(x1, x2, l);

    let span = x2 - x1;
    let axial_j = (x2 * x2 - x1 * x1) / (2.0 * l);
    let axial_i = span - axial_j;

    Vec6::new(
        w_axial * axial_i,
        w_transverse * n1,
        w_transverse * n2,
        w_axial * axial_j,
        w_transverse * n3,
        w_transverse * n4,
    )
}

/// Fixed-fixed actions of a point load at distance `a` from the i end
fn fixed_fixed_point(p: f64, a: f64, l: f64, cos_a: f64, sin_a: f64) -> Vec6 {
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;

    let p_axial = p * cos_a;
    let p_transverse = p * sin_a;

    Vec6::new(
        p_axial * b / l,
        p_transverse * b * b * (3.0 * a + b) / l3,
        p_transverse * a * b * b / l2,
        p_axial * a / l,
        p_transverse * a * a * (a + 3.0 * b) / l3,
        -p_transverse * a * a * b / l2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizontal_member(length: f64) -> Member {
        let mut member = Member::new(1, 1, 2, 210e9, 0.2, 0.3);
        member.set_geometry([0.0, 0.0], [length, 0.0]);
        member
    }

    #[test]
    fn test_fixed_fixed_full_span_uniform() {
        let member = horizontal_member(4.0);
        let i_node = Node::fixed(1, 0.0, 0.0);
        let j_node = Node::fixed(2, 4.0, 0.0);
        // Transverse load: 90 degrees global on a 0-degree member
        let load = LoadType::distributed(1, 0.0, 4.0, -10.0, 90.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[1], -20.0, max_relative = 1e-9); // qL/2
        assert_relative_eq!(fe[2], -160.0 / 12.0, max_relative = 1e-9); // qL²/12
        assert_relative_eq!(fe[3], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[4], -20.0, max_relative = 1e-9);
        assert_relative_eq!(fe[5], 160.0 / 12.0, max_relative = 1e-9);
    }

    #[test]
    fn test_fixed_fixed_midspan_point_load() {
        let member = horizontal_member(4.0);
        let i_node = Node::fixed(1, 0.0, 0.0);
        let j_node = Node::fixed(2, 4.0, 0.0);
        let load = LoadType::point(1, 0.5, 8.0, 90.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[1], 4.0, max_relative = 1e-9); // P/2
        assert_relative_eq!(fe[2], 4.0, max_relative = 1e-9); // PL/8
        assert_relative_eq!(fe[4], 4.0, max_relative = 1e-9);
        assert_relative_eq!(fe[5], -4.0, max_relative = 1e-9);
    }

    #[test]
    fn test_axial_load_splits_along_member() {
        let member = horizontal_member(4.0);
        let i_node = Node::fixed(1, 0.0, 0.0);
        let j_node = Node::fixed(2, 4.0, 0.0);
        // Load aligned with the member axis: purely axial in local frame
        let load = LoadType::distributed(1, 0.0, 4.0, 6.0, 0.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[0], 12.0, max_relative = 1e-9); // qL/2
        assert_relative_eq!(fe[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[2], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[3], 12.0, max_relative = 1e-9);
    }

    #[test]
    fn test_start_restrained_concentrates_reaction_at_start() {
        let member = horizontal_member(2.0);
        let i_node = Node::fixed(1, 0.0, 0.0);
        let j_node = Node::new(2, 2.0, 0.0);
        let load = LoadType::distributed(1, 0.0, 2.0, 5.0, 90.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[1], 10.0, max_relative = 1e-9); // total load
        assert_relative_eq!(fe[2], 10.0, max_relative = 1e-9); // total x centroid (1.0)
        assert_relative_eq!(fe[3], 0.0, epsilon = 1e-12);
        assert_relative_eq!(fe[4], 0.0, epsilon = 1e-12);
        assert_relative_eq!(fe[5], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_end_restrained_mirrors_with_signed_lever() {
        let member = horizontal_member(2.0);
        let i_node = Node::new(1, 0.0, 0.0);
        let j_node = Node::fixed(2, 2.0, 0.0);
        let load = LoadType::distributed(1, 0.0, 2.0, 5.0, 90.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(fe[4], 10.0, max_relative = 1e-9);
        assert_relative_eq!(fe[5], -10.0, max_relative = 1e-9); // lever (1.0 - 2.0)
    }

    #[test]
    fn test_point_load_on_propped_end() {
        let member = horizontal_member(4.0);
        let i_node = Node::with_restraints(1, 0.0, 0.0, [false, true, false]);
        let j_node = Node::new(2, 4.0, 0.0);
        let load = LoadType::point(1, 0.25, -12.0, 90.0);

        let fe = equivalent_local_loads(&member, &i_node, &j_node, &load).unwrap();
        assert_relative_eq!(fe[1], -12.0, max_relative = 1e-9);
        assert_relative_eq!(fe[2], -12.0, max_relative = 1e-9); // P x (0.25 x 4)
    }

    #[test]
    fn test_both_ends_free_is_rejected() {
        let member = horizontal_member(4.0);
        let i_node = Node::new(1, 0.0, 0.0);
        let j_node = Node::new(2, 4.0, 0.0);
        let load = LoadType::distributed(3, 0.0, 4.0, -10.0, 90.0);

        assert!(matches!(
            equivalent_local_loads(&member, &i_node, &j_node, &load),
            Err(FrameError::InvalidLoadConfiguration { member: 1, load: 3 })
        ));
    }

    #[test]
    fn test_global_rotation_of_end_actions() {
        // Vertical member, vertical load: the local transverse actions must
        // come back out as global-Y forces under Rᵀ.
        let mut member = Member::new(1, 1, 2, 210e9, 0.2, 0.3);
        member.set_geometry([0.0, 0.0], [0.0, 3.0]);
        let i_node = Node::fixed(1, 0.0, 0.0);
        let j_node = Node::fixed(2, 0.0, 3.0);
        let load = LoadType::distributed(1, 0.0, 3.0, -4.0, 90.0);

        let fe = equivalent_global_loads(&member, &i_node, &j_node, &load).unwrap();
        // Load is axial for this member: global fy = local ni rotated back
        assert_relative_eq!(fe[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[1], -6.0, max_relative = 1e-9);
        assert_relative_eq!(fe[3], 0.0, epsilon = 1e-9);
        assert_relative_eq!(fe[4], -6.0, max_relative = 1e-9);
    }
}
