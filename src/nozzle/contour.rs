//! Closed 2D half-profile of the nozzle wall.
//!
//! The loop runs along the outer wall (offset by the wall thickness) from the
//! converging entrance, over the throat and down the bell to the exit lip, then
//! back along the inner wall to the entrance.

use crate::errors::NozzleError;
use crate::float_types::{FRAC_PI_2, Real, tolerance};
use crate::nozzle::parameters::NozzleParameters;
use crate::nozzle::solver::{BellGeometry, ENTRANT_ANGLE, ThroatArc};
use nalgebra::{Point2, Vector2};

/// An ordered 2D polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub points: Vec<Point2<Real>>,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl Contour {
    pub const fn new(points: Vec<Point2<Real>>, closed: bool) -> Self {
        Contour { points, closed }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance from the last point back to the first.
    pub fn closure_gap(&self) -> Real {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first - last).norm(),
            _ => 0.0,
        }
    }

    /// Remove consecutive points closer than `epsilon`, including the wrap from
    /// last to first on a closed contour. Returns how many points were removed.
    pub fn dedup_within(&mut self, epsilon: Real) -> usize {
        let before = self.points.len();
        self.points.dedup_by(|next, kept| (*next - *kept).norm() <= epsilon);
        if self.closed && self.points.len() > 1 && self.closure_gap() <= epsilon {
            self.points.pop();
        }
        before - self.points.len()
    }

    /// Translate every point by `-offset`.
    pub fn subtract_offset(&mut self, offset: &Vector2<Real>) {
        for p in &mut self.points {
            *p -= offset;
        }
    }
}

/// Quadratic Bézier from the throat exit point N, through the tangent
/// intersection Q, to the exit lip E.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellCurve {
    pub n: Point2<Real>,
    pub q: Point2<Real>,
    pub e: Point2<Real>,
}

impl BellCurve {
    /// Build the control polygon from the wall angles.
    ///
    /// Q is where the wall tangent through N (slope tan θN) meets the wall
    /// tangent through E (slope tan θE). Parallel tangents have no intersection
    /// and yield [`NozzleError::DegenerateGeometry`].
    pub fn from_angles(
        n: Point2<Real>,
        e: Point2<Real>,
        theta_n: Real,
        theta_e: Real,
    ) -> Result<Self, NozzleError> {
        let degenerate = NozzleError::DegenerateGeometry { theta_n, theta_e };

        let m1 = theta_n.tan();
        let m2 = theta_e.tan();
        if !m1.is_finite() || !m2.is_finite() || (m1 - m2).abs() <= tolerance() {
            return Err(degenerate);
        }

        // y-intercepts of both tangent lines
        let c1 = n.y - m1 * n.x;
        let c2 = e.y - m2 * e.x;
        let q = Point2::new((c2 - c1) / (m1 - m2), (m1 * c2 - m2 * c1) / (m1 - m2));
        if !q.x.is_finite() || !q.y.is_finite() {
            return Err(degenerate);
        }

        Ok(BellCurve { n, q, e })
    }

    /// Control points for a solved geometry with the given exit radius.
    pub fn for_geometry(geometry: &BellGeometry, exit_radius: Real) -> Result<Self, NozzleError> {
        Self::from_angles(
            geometry.throat_exit_point(),
            Point2::new(geometry.bell_length, exit_radius),
            geometry.theta_n,
            geometry.theta_e,
        )
    }

    pub fn point(&self, t: Real) -> Point2<Real> {
        let omt = 1.0 - t;
        Point2::from(
            self.n.coords * (omt * omt) + self.q.coords * (2.0 * omt * t) + self.e.coords * (t * t),
        )
    }
}

/// `samples` evenly spaced values from `start` to `end` inclusive.
/// The final value is exactly `end`.
pub fn linspace(start: Real, end: Real, samples: usize) -> impl Iterator<Item = Real> {
    let partitions = samples.saturating_sub(1).max(1);
    let step = (end - start) / partitions as Real;
    (0..samples).map(move |i| if i + 1 == samples { end } else { start + step * i as Real })
}

fn sample_arc(
    arc: &ThroatArc,
    from: Real,
    to: Real,
    samples: usize,
    offset: &Vector2<Real>,
    out: &mut Vec<Point2<Real>>,
) {
    out.extend(linspace(from, to, samples).map(|angle| arc.point(angle) + offset));
}

/// Outer throat: entrant arc then exit arc, each without its final sample.
fn throat_section(geometry: &BellGeometry, samples: usize, offset: &Vector2<Real>) -> Vec<Point2<Real>> {
    let mut v = Vec::with_capacity(2 * samples);
    sample_arc(&geometry.entrant_arc(), ENTRANT_ANGLE, -FRAC_PI_2, samples, offset, &mut v);
    v.pop();
    sample_arc(
        &geometry.exit_arc(),
        -FRAC_PI_2,
        geometry.exit_arc_end_angle(),
        samples,
        offset,
        &mut v,
    );
    // N belongs to the bell
    v.pop();
    v
}

/// Inner throat, from N back to the entrance.
fn throat_section_reverse(
    geometry: &BellGeometry,
    samples: usize,
    offset: &Vector2<Real>,
) -> Vec<Point2<Real>> {
    let mut v = Vec::with_capacity(2 * samples);
    sample_arc(
        &geometry.exit_arc(),
        geometry.exit_arc_end_angle(),
        -FRAC_PI_2,
        samples,
        offset,
        &mut v,
    );
    v.pop();
    sample_arc(&geometry.entrant_arc(), -FRAC_PI_2, ENTRANT_ANGLE, samples, offset, &mut v);
    v
}

fn bell_section(curve: &BellCurve, samples: usize, offset: &Vector2<Real>) -> Vec<Point2<Real>> {
    linspace(0.0, 1.0, samples)
        .map(|t| curve.point(t) + offset)
        .collect()
}

/// Inner bell, from E back towards N. N itself is left to the inner throat.
fn bell_section_reverse(
    curve: &BellCurve,
    samples: usize,
    offset: &Vector2<Real>,
) -> Vec<Point2<Real>> {
    let mut v: Vec<_> = linspace(1.0, 0.0, samples)
        .map(|t| curve.point(t) + offset)
        .collect();
    v.pop();
    v
}

/// Number of points [`build`] produces before coincident points are removed.
pub const fn expected_point_count(throat_vertices: usize, bell_vertices: usize) -> usize {
    4 * throat_vertices + 2 * bell_vertices - 4
}

/// Build the closed wall contour for `params` from an already solved `geometry`.
///
/// Consecutive points closer than [`tolerance`] are merged, so the returned
/// loop never contains a zero-length segment.
pub fn build(params: &NozzleParameters, geometry: &BellGeometry) -> Result<Contour, NozzleError> {
    let curve = BellCurve::for_geometry(geometry, params.exit_radius)?;

    let throat_samples = params.throat_vertex_count.max(2);
    let bell_samples = params.bell_vertex_count.max(2);
    let outer = Vector2::new(0.0, params.wall_thickness);
    let inner = Vector2::zeros();

    let mut points = Vec::with_capacity(expected_point_count(throat_samples, bell_samples));
    points.extend(throat_section(geometry, throat_samples, &outer));
    points.extend(bell_section(&curve, bell_samples, &outer));
    points.extend(bell_section_reverse(&curve, bell_samples, &inner));
    points.extend(throat_section_reverse(geometry, throat_samples, &inner));

    let mut contour = Contour::new(points, true);
    let removed = contour.dedup_within(tolerance());
    if removed > 0 {
        log::warn!("merged {removed} coincident contour point(s)");
    }

    contour.subtract_offset(&params.position_offset);

    log::debug!(
        "contour: {} points, closure gap {:.6}, throat length {:.6}",
        contour.len(),
        contour.closure_gap(),
        geometry.throat_length
    );
    Ok(contour)
}
