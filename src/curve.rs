//! `CurveData`: per-vertex topology of a 2D polyline, ready to be swept.

use crate::float_types::{Real, tolerance};
use crate::nozzle::contour::Contour;
use nalgebra::{Point2, Vector2};

/// Vertices, normals, segment indices and u-coordinates of a 2D polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveData {
    pub verts: Vec<Point2<Real>>,
    /// Unit normals, one per vertex
    pub normals: Vec<Vector2<Real>>,
    /// Flat list of segment index pairs `[a0, b0, a1, b1, ...]`
    pub lines: Vec<usize>,
    /// `i / len` for every vertex
    pub u_coords: Vec<Real>,
    pub closed: bool,
    /// Vertices whose incoming tangent had zero length and borrowed a neighbour's normal
    pub degenerate_tangents: Vec<usize>,
}

impl CurveData {
    pub fn new(verts: Vec<Point2<Real>>, closed: bool) -> Self {
        let mut curve = CurveData {
            verts,
            closed,
            ..Default::default()
        };
        if curve.verts.is_empty() {
            return curve;
        }
        curve.generate_lines();
        curve.generate_normals();
        curve.generate_u_coords();
        curve
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Number of segments, i.e. `lines.len() / 2`.
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Iterate segments as `(start, end)` index pairs.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lines.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    fn generate_lines(&mut self) {
        let n = self.verts.len();
        let segments = if self.closed { n } else { n - 1 };
        self.lines = Vec::with_capacity(segments * 2);
        for i in 0..n - 1 {
            self.lines.push(i);
            self.lines.push(i + 1);
        }
        if self.closed {
            // stitch the loop
            self.lines.push(n - 1);
            self.lines.push(0);
        }
    }

    /// Normals approximate the curve direction by the incoming segment, rotated
    /// a quarter turn counter-clockwise. Vertex 0 uses its outgoing segment.
    fn generate_normals(&mut self) {
        let n = self.verts.len();
        if n == 1 {
            self.normals = vec![Vector2::y()];
            return;
        }

        let eps = tolerance();
        let mut normals: Vec<Option<Vector2<Real>>> = (0..n)
            .map(|i| {
                let tangent = if i == 0 {
                    self.verts[1] - self.verts[0]
                } else {
                    self.verts[i] - self.verts[i - 1]
                };
                let rotated = Vector2::new(-tangent.y, tangent.x);
                rotated.try_normalize(eps)
            })
            .collect();

        self.degenerate_tangents = normals
            .iter()
            .enumerate()
            .filter_map(|(i, normal)| normal.is_none().then_some(i))
            .collect();

        if !self.degenerate_tangents.is_empty() {
            log::warn!(
                "{} zero-length tangent(s) in curve, reusing neighbouring normals",
                self.degenerate_tangents.len()
            );
            // leading run takes the first valid normal, everything else the previous one
            let first_valid = normals.iter().flatten().next().copied().unwrap_or_else(Vector2::y);
            let mut previous = first_valid;
            for normal in normals.iter_mut() {
                match *normal {
                    Some(valid) => previous = valid,
                    None => *normal = Some(previous),
                }
            }
        }

        self.normals = normals.into_iter().map(|n| n.unwrap_or_else(Vector2::y)).collect();
    }

    fn generate_u_coords(&mut self) {
        let n = self.verts.len() as Real;
        self.u_coords = (0..self.verts.len()).map(|i| i as Real / n).collect();
    }
}

impl From<&Contour> for CurveData {
    fn from(contour: &Contour) -> Self {
        CurveData::new(contour.points.clone(), contour.closed)
    }
}

impl From<Contour> for CurveData {
    fn from(contour: Contour) -> Self {
        CurveData::new(contour.points, contour.closed)
    }
}
