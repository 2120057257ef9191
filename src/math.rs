//! Matrix utilities for the direct stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vector = DVector<f64>;

/// 6x6 matrix for plane-frame member stiffness and rotation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-component vector of member end actions (Ni, Qi, Mi, Nj, Qj, Mj)
pub type Vec6 = SVector<f64, 6>;

/// Compute the local stiffness matrix for a 2D frame member
///
/// Standard Euler-Bernoulli plane-frame element with axial, shear/bending
/// and moment terms. DOF order is (dx_i, dy_i, rz_i, dx_j, dy_j, rz_j) in
/// the member's local axes.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `i` - Second moment of area
/// * `length` - Member length
pub fn member_local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let ei_l3 = e * i / l3;
    let ei_l2 = e * i / l2;
    let ei_l = e * i / l;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at i
        ea_l,    0.0,          0.0,         -ea_l,    0.0,          0.0,
        // Row 1: shear at i
        0.0,     12.0*ei_l3,   6.0*ei_l2,    0.0,    -12.0*ei_l3,   6.0*ei_l2,
        // Row 2: moment at i
        0.0,     6.0*ei_l2,    4.0*ei_l,     0.0,    -6.0*ei_l2,    2.0*ei_l,
        // Row 3: axial at j
        -ea_l,   0.0,          0.0,          ea_l,    0.0,          0.0,
        // Row 4: shear at j
        0.0,     -12.0*ei_l3,  -6.0*ei_l2,   0.0,     12.0*ei_l3,  -6.0*ei_l2,
        // Row 5: moment at j
        0.0,     6.0*ei_l2,    2.0*ei_l,     0.0,    -6.0*ei_l2,    4.0*ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the rotation matrix mapping global to local bases for a member
///
/// Two repeated 3x3 blocks of [[c, s, 0], [-s, c, 0], [0, 0, 1]], one per
/// end node. Global stiffness is Rᵀ K_local R; forces rotate to local by R.
///
/// # Arguments
/// * `angle_deg` - Member orientation angle in degrees, measured from the
///   global x-axis to the member's i→j direction
pub fn member_rotation_matrix(angle_deg: f64) -> Mat6 {
    let (s, c) = angle_deg.to_radians().sin_cos();

    #[rustfmt::skip]
    let data = [
         c,    s,    0.0,  0.0,  0.0,  0.0,
        -s,    c,    0.0,  0.0,  0.0,  0.0,
         0.0,  0.0,  1.0,  0.0,  0.0,  0.0,
         0.0,  0.0,  0.0,  c,    s,    0.0,
         0.0,  0.0,  0.0, -s,    c,    0.0,
         0.0,  0.0,  0.0,  0.0,  0.0,  1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Integrals of the cubic Hermite beam shape functions over [x1, x2]
///
/// Returns [∫N1, ∫N2, ∫N3, ∫N4] for a span of length `l`, with
/// N1 = 1 - 3ξ² + 2ξ³, N2 = Lξ(1-ξ)², N3 = 3ξ² - 2ξ³, N4 = Lξ²(ξ-1)
/// and ξ = x/L. Weighting a transverse intensity by these integrals gives
/// the consistent (fixed-fixed) end actions of a partial uniform load.
pub(crate) fn hermite_integrals(x1: f64, x2: f64, l: f64) -> [f64; 4] {
    let l2 = l * l;
    let antiderivative = |x: f64| {
        let xi = x / l;
        let xi2 = xi * xi;
        let xi3 = xi2 * xi;
        let xi4 = xi3 * xi;
        [
            l * (xi - xi3 + xi4 / 2.0),
            l2 * (xi2 / 2.0 - 2.0 * xi3 / 3.0 + xi4 / 4.0),
            l * (xi3 - xi4 / 2.0),
            l2 * (xi4 / 4.0 - xi3 / 3.0),
        ]
    };
    let lo = antiderivative(x1);
    let hi = antiderivative(x2);
    [hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2], hi[3] - lo[3]]
}

/// Solve a dense linear system via LU decomposition
///
/// Returns `None` when the matrix is singular or numerically
/// ill-conditioned, judged by the ratio of the smallest to the largest
/// pivot of the U factor. The caller maps `None` to a structural
/// instability error rather than propagating NaNs downstream.
pub fn solve_dense(k: &Mat, f: &Vector) -> Option<Vector> {
    let lu = k.clone().lu();

    let u = lu.u();
    let n = u.nrows().min(u.ncols());
    let mut max_pivot = 0.0_f64;
    let mut min_pivot = f64::INFINITY;
    for i in 0..n {
        let p = u[(i, i)].abs();
        max_pivot = max_pivot.max(p);
        min_pivot = min_pivot.min(p);
    }
    if max_pivot == 0.0 || min_pivot < max_pivot * 1e-12 {
        return None;
    }

    lu.solve(f)
}
