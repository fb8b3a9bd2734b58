//! Empirical wall-angle data for thrust-optimized bell nozzles.
//!
//! Entrance (θN) and exit (θE) wall angles in degrees, sampled at eight
//! expansion ratios for each of the three bell length fractions.

use crate::float_types::Real;
use crate::nozzle::parameters::LengthClass;

/// Number of expansion-ratio samples in the table
pub const SAMPLE_COUNT: usize = 8;

/// One length-fraction row pair: θN and θE for every ratio sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRows {
    pub theta_n: [Real; SAMPLE_COUNT],
    pub theta_e: [Real; SAMPLE_COUNT],
}

/// Read-only wall-angle table shared by every solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallAngleTable {
    /// Expansion ratio samples, strictly increasing
    pub ratios: [Real; SAMPLE_COUNT],
    pub short: AngleRows,
    pub normal: AngleRows,
    pub long: AngleRows,
}

/// The process-wide table.
pub static WALL_ANGLES: WallAngleTable = WallAngleTable {
    ratios: [4.0, 5.0, 10.0, 20.0, 30.0, 40.0, 50.0, 100.0],
    short: AngleRows {
        theta_n: [20.5, 20.5, 16.0, 14.5, 14.0, 13.5, 13.0, 11.2],
        theta_e: [26.5, 28.0, 32.0, 35.0, 36.2, 37.1, 35.0, 40.0],
    },
    normal: AngleRows {
        theta_n: [21.5, 23.0, 26.3, 28.8, 30.0, 31.0, 31.5, 33.5],
        theta_e: [14.0, 13.0, 11.0, 9.0, 8.5, 8.0, 7.5, 7.0],
    },
    long: AngleRows {
        theta_n: [20.0, 21.0, 24.0, 27.0, 28.5, 29.5, 30.2, 32.0],
        theta_e: [11.5, 10.5, 8.0, 7.0, 6.5, 6.0, 6.0, 6.0],
    },
};

impl WallAngleTable {
    /// Rows for a length class.
    pub const fn rows(&self, class: LengthClass) -> &AngleRows {
        match class {
            LengthClass::Short => &self.short,
            LengthClass::Normal => &self.normal,
            LengthClass::Long => &self.long,
        }
    }

    /// Index of the sample closest to `ratio`.
    ///
    /// Scans in table order with a strict comparison, so among equally close
    /// samples the lowest index wins.
    pub fn nearest_index(&self, ratio: Real) -> usize {
        let mut nearest = 0;
        let mut best = Real::MAX;
        for (i, &sample) in self.ratios.iter().enumerate() {
            let distance = (ratio - sample).abs();
            if distance < best {
                best = distance;
                nearest = i;
            }
        }
        nearest
    }

    /// Indices `(lo, lo + 1)` of the samples bracketing `ratio`.
    /// Ratios outside the table use the first or last pair.
    pub fn bracket(&self, ratio: Real) -> (usize, usize) {
        let hi = self
            .ratios
            .iter()
            .position(|&sample| sample >= ratio)
            .unwrap_or(SAMPLE_COUNT - 1)
            .clamp(1, SAMPLE_COUNT - 1);
        (hi - 1, hi)
    }

    pub fn min_ratio(&self) -> Real {
        self.ratios[0]
    }

    pub fn max_ratio(&self) -> Real {
        self.ratios[SAMPLE_COUNT - 1]
    }
}
