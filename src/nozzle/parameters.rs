//! Input parameters for one nozzle solve, and the range clamping applied at
//! the configuration boundary.

use crate::errors::NozzleError;
use crate::float_types::{Real, tolerance};
use nalgebra::Vector2;

/// Bell length as a percentage of the reference 15° conical nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthClass {
    Short,
    #[default]
    Normal,
    Long,
}

impl LengthClass {
    pub const fn percent(self) -> u32 {
        match self {
            LengthClass::Short => 60,
            LengthClass::Normal => 80,
            LengthClass::Long => 90,
        }
    }

    /// Fraction of the conical reference length, `percent / 100`.
    pub fn fraction(self) -> Real {
        self.percent() as Real / 100.0
    }

    /// Map a percentage onto a class. Anything but 60 or 90 is treated as 80.
    pub const fn from_percent(percent: u32) -> Self {
        match percent {
            60 => LengthClass::Short,
            90 => LengthClass::Long,
            _ => LengthClass::Normal,
        }
    }
}

impl From<u32> for LengthClass {
    fn from(percent: u32) -> Self {
        Self::from_percent(percent)
    }
}

/// Smallest ratio kept after clamping; a ratio of exactly 1 has no bell.
pub const MIN_EXPANSION_RATIO: Real = 1.001;
pub const MAX_EXPANSION_RATIO: Real = 500.0;
pub const MAX_EXIT_RADIUS: Real = 10.0;
pub const MIN_SECTION_VERTICES: usize = 2;
pub const MAX_SECTION_VERTICES: usize = 50;
pub const MIN_WALL_THICKNESS: Real = 0.001;
pub const MAX_WALL_THICKNESS: Real = 0.1;

/// Everything needed to solve one nozzle profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleParameters {
    /// Exit area / throat area
    pub expansion_ratio: Real,
    pub exit_radius: Real,
    pub length_class: LengthClass,
    /// Samples per throat sub-arc
    pub throat_vertex_count: usize,
    /// Samples along the bell curve
    pub bell_vertex_count: usize,
    pub wall_thickness: Real,
    /// Subtracted from every contour point before revolving
    pub position_offset: Vector2<Real>,
}

impl Default for NozzleParameters {
    fn default() -> Self {
        Self {
            expansion_ratio: 20.0,
            exit_radius: 1.0,
            length_class: LengthClass::Normal,
            throat_vertex_count: 50,
            bell_vertex_count: 50,
            wall_thickness: 0.1,
            position_offset: Vector2::zeros(),
        }
    }
}

impl NozzleParameters {
    pub fn new(expansion_ratio: Real, exit_radius: Real, length_class: LengthClass) -> Self {
        Self {
            expansion_ratio,
            exit_radius,
            length_class,
            ..Default::default()
        }
    }

    pub const fn with_vertex_counts(mut self, throat: usize, bell: usize) -> Self {
        self.throat_vertex_count = throat;
        self.bell_vertex_count = bell;
        self
    }

    pub const fn with_wall_thickness(mut self, wall_thickness: Real) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }

    pub fn with_position_offset(mut self, offset: Vector2<Real>) -> Self {
        self.position_offset = offset;
        self
    }

    /// Returns a copy with every field clamped into its supported range.
    ///
    /// * expansion ratio: (1, 500]
    /// * exit radius: (0, 10]
    /// * vertex counts: [2, 50]
    /// * wall thickness: [0.001, 0.1]
    ///
    /// Fails only when a value is NaN or infinite, since no clamp can repair those.
    pub fn sanitized(&self) -> Result<Self, NozzleError> {
        let finite = |name: &'static str, value: Real| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(NozzleError::InvalidParameter { name, value })
            }
        };

        let expansion_ratio = finite("expansion_ratio", self.expansion_ratio)?;
        let exit_radius = finite("exit_radius", self.exit_radius)?;
        let wall_thickness = finite("wall_thickness", self.wall_thickness)?;
        finite("position_offset.x", self.position_offset.x)?;
        finite("position_offset.y", self.position_offset.y)?;

        Ok(Self {
            expansion_ratio: expansion_ratio.clamp(MIN_EXPANSION_RATIO, MAX_EXPANSION_RATIO),
            exit_radius: exit_radius.clamp(tolerance(), MAX_EXIT_RADIUS),
            length_class: self.length_class,
            throat_vertex_count: self
                .throat_vertex_count
                .clamp(MIN_SECTION_VERTICES, MAX_SECTION_VERTICES),
            bell_vertex_count: self
                .bell_vertex_count
                .clamp(MIN_SECTION_VERTICES, MAX_SECTION_VERTICES),
            wall_thickness: wall_thickness.clamp(MIN_WALL_THICKNESS, MAX_WALL_THICKNESS),
            position_offset: self.position_offset,
        })
    }
}
