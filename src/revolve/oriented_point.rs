//! Position plus orientation of one revolution slice.

use crate::float_types::{Real, TAU};
use nalgebra::{Point2, Point3, UnitQuaternion, Vector2, Vector3};

/// A local frame in world space. The 2D contour lives in the frame's local XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedPoint {
    pub position: Point3<Real>,
    pub rotation: UnitQuaternion<Real>,
}

impl OrientedPoint {
    pub const fn new(position: Point3<Real>, rotation: UnitQuaternion<Real>) -> Self {
        OrientedPoint { position, rotation }
    }

    /// Frame whose local +Z points along `forward` and whose local +Y is `up`
    /// (re-orthogonalised against `forward`).
    pub fn looking(position: Point3<Real>, forward: &Vector3<Real>, up: &Vector3<Real>) -> Self {
        OrientedPoint {
            position,
            rotation: UnitQuaternion::face_towards(forward, up),
        }
    }

    pub fn local_to_world(&self, local: &Point2<Real>) -> Point3<Real> {
        self.position + self.rotation * Vector3::new(local.x, local.y, 0.0)
    }

    pub fn local_to_world_direction(&self, local: &Vector2<Real>) -> Vector3<Real> {
        self.rotation * Vector3::new(local.x, local.y, 0.0)
    }
}

/// `slices` frames evenly spaced around a full turn about the world Y axis.
///
/// Frame `i` sits at the origin at angle `t = i / slices · 2π`, looking along
/// `(cos t, 0, sin t)` with up `(-sin t, 0, cos t)`. Local X maps to world +Y,
/// so a contour's x coordinate runs along the axis and its y coordinate is the
/// distance from it.
pub fn revolution_path(slices: usize) -> Vec<OrientedPoint> {
    (0..slices)
        .map(|i| {
            let t = i as Real / slices as Real * TAU;
            let (sin, cos) = t.sin_cos();
            OrientedPoint::looking(
                Point3::origin(),
                &Vector3::new(cos, 0.0, sin),
                &Vector3::new(-sin, 0.0, cos),
            )
        })
        .collect()
}
