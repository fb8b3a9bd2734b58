//! Wall-angle solve: turns expansion ratio, throat radius and length class
//! into the bell geometry the contour is built from.

use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::nozzle::parameters::LengthClass;
use crate::nozzle::table::{WALL_ANGLES, WallAngleTable};
use nalgebra::Point2;

/// Half-angle of the conical nozzle the bell length is measured against, in degrees.
pub const CONICAL_HALF_ANGLE_DEG: Real = 15.0;

/// A requested ratio whose rounded distance to the nearest table sample is at
/// most this value uses that sample's angles without interpolation.
pub const NEAR_MATCH_TOLERANCE: Real = 1.0;

/// Start angle of the entrant throat arc ("typical" −135°).
pub const ENTRANT_ANGLE: Real = -3.0 * PI / 4.0;

/// Entrant arc radius and centre height, in throat radii.
pub const ENTRANT_ARC_RADIUS: Real = 1.5;
pub const ENTRANT_ARC_CENTER: Real = 2.5;

/// Exit arc radius and centre height, in throat radii.
pub const EXIT_ARC_RADIUS: Real = 0.382;
pub const EXIT_ARC_CENTER: Real = 1.382;

/// A circle on the nozzle axis, parameterised by angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroatArc {
    pub center: Point2<Real>,
    pub radius: Real,
}

impl ThroatArc {
    /// Point on the arc at `angle` radians.
    pub fn point(&self, angle: Real) -> Point2<Real> {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Where the wall angles of a solve came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleSource {
    /// Taken unmodified from the table row at `index`
    Table { index: usize },
    /// Interpolated between the samples at `lo` and `hi`
    Interpolated { lo: usize, hi: usize },
}

/// Quantities derived from one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BellGeometry {
    /// √(expansion ratio), the exit to throat radius ratio
    pub eps: Real,
    pub throat_radius: Real,
    /// Axial length of the bell section
    pub bell_length: Real,
    /// Wall angle at the throat exit, radians
    pub theta_n: Real,
    /// Wall angle at the nozzle exit, radians
    pub theta_e: Real,
    /// Axial span from the start of the entrant arc to the throat exit point
    pub throat_length: Real,
    pub length_class: LengthClass,
    pub source: AngleSource,
}

impl BellGeometry {
    /// Converging arc upstream of the throat.
    pub fn entrant_arc(&self) -> ThroatArc {
        ThroatArc {
            center: Point2::new(0.0, ENTRANT_ARC_CENTER * self.throat_radius),
            radius: ENTRANT_ARC_RADIUS * self.throat_radius,
        }
    }

    /// Diverging arc between the throat and the bell.
    pub fn exit_arc(&self) -> ThroatArc {
        ThroatArc {
            center: Point2::new(0.0, EXIT_ARC_CENTER * self.throat_radius),
            radius: EXIT_ARC_RADIUS * self.throat_radius,
        }
    }

    /// Final angle of the exit arc, where the bell takes over.
    pub fn exit_arc_end_angle(&self) -> Real {
        self.theta_n - FRAC_PI_2
    }

    /// Point N, where the exit arc hands over to the bell.
    pub fn throat_exit_point(&self) -> Point2<Real> {
        self.exit_arc().point(self.exit_arc_end_angle())
    }

    /// Axial nozzle length as bell length plus throat length.
    pub fn total_length(&self) -> Real {
        self.bell_length + self.throat_length
    }
}

/// Solve the bell geometry against the shared wall-angle table.
pub fn solve(expansion_ratio: Real, throat_radius: Real, length_class: LengthClass) -> BellGeometry {
    solve_with_table(&WALL_ANGLES, expansion_ratio, throat_radius, length_class)
}

/// Solve the bell geometry against an explicit table.
pub fn solve_with_table(
    table: &WallAngleTable,
    expansion_ratio: Real,
    throat_radius: Real,
    length_class: LengthClass,
) -> BellGeometry {
    let eps = expansion_ratio.sqrt();
    let bell_length = length_class.fraction() * ((eps - 1.0) * throat_radius)
        / CONICAL_HALF_ANGLE_DEG.to_radians().tan();

    let (theta_n_deg, theta_e_deg, source) = wall_angles(table, expansion_ratio, length_class);
    log::trace!(
        "wall angles for ratio {expansion_ratio} ({}%): thetaN={theta_n_deg}°, thetaE={theta_e_deg}° via {source:?}",
        length_class.percent()
    );

    let mut geometry = BellGeometry {
        eps,
        throat_radius,
        bell_length,
        theta_n: theta_n_deg.to_radians(),
        theta_e: theta_e_deg.to_radians(),
        throat_length: 0.0,
        length_class,
        source,
    };
    geometry.throat_length =
        geometry.throat_exit_point().x - geometry.entrant_arc().point(ENTRANT_ANGLE).x;
    geometry
}

/// Look up (θN, θE) in degrees for a ratio.
fn wall_angles(
    table: &WallAngleTable,
    ratio: Real,
    length_class: LengthClass,
) -> (Real, Real, AngleSource) {
    let rows = table.rows(length_class);

    let nearest = table.nearest_index(ratio);
    if (ratio - table.ratios[nearest]).abs().round() <= NEAR_MATCH_TOLERANCE {
        return (
            rows.theta_n[nearest],
            rows.theta_e[nearest],
            AngleSource::Table { index: nearest },
        );
    }

    let clamped = ratio.clamp(table.min_ratio(), table.max_ratio());
    let (lo, hi) = table.bracket(clamped);
    let (x0, x1) = (table.ratios[lo], table.ratios[hi]);
    (
        interpolate(clamped, x0, x1, rows.theta_n[lo], rows.theta_n[hi]),
        interpolate(clamped, x0, x1, rows.theta_e[lo], rows.theta_e[hi]),
        AngleSource::Interpolated { lo, hi },
    )
}

/// Two-point linear interpolation.
fn interpolate(x: Real, x0: Real, x1: Real, y0: Real, y1: Real) -> Real {
    let m = (y1 - y0) / (x1 - x0);
    y0 + m * (x - x0)
}
