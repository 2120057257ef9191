//! frame2d example - portal frame with member loads and a roof load

use frame2d::prelude::*;

fn main() {
    env_logger::init();

    println!("=== frame2d example: portal frame ===\n");

    let mut model = Model::new();

    //     N3 -------- N4
    //     |          |
    //     |          |
    //     N1        N2
    //     ^          ^
    //   fixed      fixed

    let height = 4.0;
    let span = 6.0;

    // Concrete members, E in Pa, rectangular sections in m
    let e = 30e9;

    model.add_node(Node::fixed(1, 0.0, 0.0)).unwrap();
    model.add_node(Node::fixed(2, span, 0.0)).unwrap();
    model.add_node(Node::new(3, 0.0, height)).unwrap();
    model.add_node(Node::new(4, span, height)).unwrap();

    model.add_member(Member::new(1, 1, 3, e, 0.3, 0.3)).unwrap();
    model.add_member(Member::new(2, 2, 4, e, 0.3, 0.3)).unwrap();
    model.add_member(Member::new(3, 3, 4, e, 0.25, 0.5)).unwrap();

    // 5 kN/m wind pressure over the full height of the left column,
    // pushing in global +x (load angle in global degrees)
    model
        .add_load_type(LoadType::distributed(1, 0.0, height, 5e3, 0.0))
        .unwrap();
    model.add_member_load(MemberLoad::new(1, 1)).unwrap();

    // 4 kN point load at mid-height of the right column, also in +x
    model.add_load_type(LoadType::point(2, 0.5, 4e3, 0.0)).unwrap();
    model.add_member_load(MemberLoad::new(2, 2)).unwrap();

    // Roof dead load carried to the beam ends as nodal loads
    model.add_nodal_load(NodalLoad::fy(3, -60e3)).unwrap();
    model.add_nodal_load(NodalLoad::fy(4, -60e3)).unwrap();

    println!("Running linear analysis...\n");
    let results = model.analyze().expect("analysis failed");

    println!("Node displacements:");
    for node in &model.nodes {
        let disp = results.node_displacement(node.id).unwrap();
        println!(
            "  N{}: dx = {:.4} mm, dy = {:.4} mm, rz = {:.6} rad",
            node.id,
            disp.dx * 1000.0,
            disp.dy * 1000.0,
            disp.rz
        );
    }

    println!("\nSupport reactions:");
    for node in model.nodes.iter().filter(|n| n.is_supported()) {
        let rxn = results.node_reaction(node.id).unwrap();
        println!(
            "  N{}: fx = {:.2} kN, fy = {:.2} kN, mz = {:.2} kN·m",
            node.id,
            rxn.fx / 1000.0,
            rxn.fy / 1000.0,
            rxn.mz / 1000.0
        );
    }

    println!("\nMember end forces (local):");
    for (position, member) in model.members.iter().enumerate() {
        let forces = results.member_end_forces(position).unwrap();
        println!(
            "  M{}: N_i = {:.2} kN, Q_i = {:.2} kN, M_i = {:.2} kN·m | N_j = {:.2} kN, Q_j = {:.2} kN, M_j = {:.2} kN·m",
            member.id,
            forces.axial_i / 1000.0,
            forces.shear_i / 1000.0,
            forces.moment_i / 1000.0,
            forces.axial_j / 1000.0,
            forces.shear_j / 1000.0,
            forces.moment_j / 1000.0
        );
    }

    println!("\n=== analysis complete ===");
}
