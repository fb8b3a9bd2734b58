//! `MeshBuffers` struct and implementations of the `TransformOps` and
//! `MeshTarget` traits for `MeshBuffers`

use crate::float_types::Real;
use crate::traits::{MeshTarget, TransformOps};
use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector3};

pub mod manifold;

pub use manifold::ManifoldAnalysis;

/// Flat vertex, normal, UV and triangle index buffers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    pub positions: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uvs: Vec<Point2<Real>>,
    /// Triangle list, three indices per triangle
    pub indices: Vec<usize>,
}

impl MeshBuffers {
    /// Buffers with `vertex_count` zeroed vertices and no triangles.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        MeshBuffers {
            positions: vec![Point3::origin(); vertex_count],
            normals: vec![Vector3::zeros(); vertex_count],
            uvs: vec![Point2::origin(); vertex_count],
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Axis-aligned bounds of all positions, `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(mins, maxs), p| {
            (mins.inf(p), maxs.sup(p))
        }))
    }

    /// Positions of one revolution slice, in curve order.
    ///
    /// `ring_len` is the number of curve vertices per slice. Returns `None`
    /// when the slice lies outside the buffer.
    pub fn edge_loop(&self, slice: usize, ring_len: usize) -> Option<&[Point3<Real>]> {
        let start = slice.checked_mul(ring_len)?;
        self.positions.get(start..start.checked_add(ring_len)?)
    }
}

impl MeshTarget for MeshBuffers {
    fn replace_with(&mut self, buffers: MeshBuffers) {
        *self = buffers;
    }
}

impl TransformOps for MeshBuffers {
    /// Positions are transformed by `matrix`, normals by its inverse transpose
    /// and renormalised. A singular matrix leaves normals untouched.
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let linear: Matrix3<Real> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let normal_matrix = linear.try_inverse().map(|inv| inv.transpose());

        let positions = self
            .positions
            .iter()
            .map(|p| matrix.transform_point(p))
            .collect();
        let normals = match normal_matrix {
            Some(m) => self
                .normals
                .iter()
                .map(|n| {
                    let t = m * n;
                    t.try_normalize(Real::EPSILON).unwrap_or(t)
                })
                .collect(),
            None => self.normals.clone(),
        };

        MeshBuffers {
            positions,
            normals,
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
        }
    }
}
