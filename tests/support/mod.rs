//! Test support library
//! Provides shared parameter sets and helpers for the integration tests.

#![allow(dead_code)]

use bellnozzle::{
    float_types::Real,
    mesh::MeshBuffers,
    nozzle::{LengthClass, NozzleParameters},
};
use nalgebra::Vector3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Ratio 20, exit radius 1, 80% bell, 10 throat and 10 bell vertices, 0.05 wall.
pub fn reference_parameters() -> NozzleParameters {
    NozzleParameters::new(20.0, 1.0, LengthClass::Normal)
        .with_vertex_counts(10, 10)
        .with_wall_thickness(0.05)
}

/// Unnormalised face normal of triangle `t`.
pub fn face_normal(mesh: &MeshBuffers, t: usize) -> Vector3<Real> {
    let i = &mesh.indices[3 * t..3 * t + 3];
    let (a, b, c) = (
        mesh.positions[i[0]],
        mesh.positions[i[1]],
        mesh.positions[i[2]],
    );
    (b - a).cross(&(c - a))
}

/// Every index of the triangle list is inside the vertex buffer.
pub fn indices_in_range(mesh: &MeshBuffers) -> bool {
    mesh.indices.iter().all(|&i| i < mesh.vertex_count())
}
