//! Surface of revolution: sweeps a [`CurveData`] through a ring of
//! [`OrientedPoint`] frames into a closed triangle mesh.

use crate::curve::CurveData;
use crate::errors::NozzleError;
use crate::float_types::Real;
use crate::mesh::MeshBuffers;
use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod oriented_point;

pub use oriented_point::{OrientedPoint, revolution_path};

/// Fewest frames that still enclose a volume.
pub const MIN_SLICES: usize = 3;

/// Configuration of the revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevolveOptions {
    /// Number of frames around the axis
    pub slices: usize,
}

impl Default for RevolveOptions {
    fn default() -> Self {
        Self { slices: 36 }
    }
}

impl RevolveOptions {
    pub const fn new(slices: usize) -> Self {
        Self { slices }
    }

    /// Copy with `slices` raised to [`MIN_SLICES`].
    pub fn sanitized(&self) -> Self {
        Self {
            slices: self.slices.max(MIN_SLICES),
        }
    }
}

/// Sweep `curve` through every frame of `path`.
///
/// Vertex `j` of slice `i` is stored at `i * V + j`. Each curve segment
/// `(l0, l1)` is joined to the next slice by the quad
/// `a = l0 + (i+1)V, b = l0 + iV, c = l1 + iV, d = l1 + (i+1)V` (all taken
/// modulo the vertex count) and split into the triangles `(a, b, c)` and
/// `(c, d, a)`. The modulo joins the last slice back to the first, so the
/// surface has no seam vertices.
pub fn extrude(curve: &CurveData, path: &[OrientedPoint]) -> Result<MeshBuffers, NozzleError> {
    if path.len() < MIN_SLICES {
        return Err(NozzleError::TooFewSlices(path.len()));
    }
    if curve.is_empty() {
        return Err(NozzleError::EmptyContour);
    }

    let verts_in_curve = curve.len();
    let edge_loops = path.len();
    let vert_count = verts_in_curve * edge_loops;

    let mut mesh = MeshBuffers::with_vertex_count(vert_count);
    fill_vertices(&mut mesh, curve, path);
    mesh.indices = triangle_indices(curve, edge_loops);

    log::debug!(
        "revolved {verts_in_curve} curve vertices through {edge_loops} slices: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Write positions, normals and UVs of one slice into its own chunk.
fn fill_slice(
    slice: usize,
    frame: &OrientedPoint,
    curve: &CurveData,
    edge_loops: usize,
    positions: &mut [Point3<Real>],
    normals: &mut [Vector3<Real>],
    uvs: &mut [Point2<Real>],
) {
    let v = slice as Real / edge_loops as Real;
    for j in 0..curve.len() {
        positions[j] = frame.local_to_world(&curve.verts[j]);
        normals[j] = frame.local_to_world_direction(&curve.normals[j]);
        uvs[j] = Point2::new(curve.u_coords[j], v);
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_vertices(mesh: &mut MeshBuffers, curve: &CurveData, path: &[OrientedPoint]) {
    let n = curve.len();
    let edge_loops = path.len();
    mesh.positions
        .chunks_mut(n)
        .zip(mesh.normals.chunks_mut(n))
        .zip(mesh.uvs.chunks_mut(n))
        .enumerate()
        .for_each(|(i, ((positions, normals), uvs))| {
            fill_slice(i, &path[i], curve, edge_loops, positions, normals, uvs)
        });
}

/// Slices write disjoint chunks, so they are filled in parallel.
#[cfg(feature = "parallel")]
fn fill_vertices(mesh: &mut MeshBuffers, curve: &CurveData, path: &[OrientedPoint]) {
    let n = curve.len();
    let edge_loops = path.len();
    mesh.positions
        .par_chunks_mut(n)
        .zip(mesh.normals.par_chunks_mut(n))
        .zip(mesh.uvs.par_chunks_mut(n))
        .enumerate()
        .for_each(|(i, ((positions, normals), uvs))| {
            fill_slice(i, &path[i], curve, edge_loops, positions, normals, uvs)
        });
}

/// Two triangles per curve segment per slice.
pub fn triangle_indices(curve: &CurveData, edge_loops: usize) -> Vec<usize> {
    let verts_in_curve = curve.len();
    let vert_count = verts_in_curve * edge_loops;
    let mut indices = Vec::with_capacity(curve.segment_count() * edge_loops * 6);

    for i in 0..edge_loops {
        let offset = i * verts_in_curve;
        for (l0, l1) in curve.segments() {
            let a = (offset + l0 + verts_in_curve) % vert_count;
            let b = (offset + l0) % vert_count;
            let c = (offset + l1) % vert_count;
            let d = (offset + l1 + verts_in_curve) % vert_count;
            indices.extend_from_slice(&[a, b, c, c, d, a]);
        }
    }
    indices
}
