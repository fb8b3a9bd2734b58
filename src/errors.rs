//! Errors raised while building a nozzle contour or its revolved mesh.
//!
//! Every variant is recoverable: a host that rebuilds the nozzle once per tick
//! keeps its previous mesh and tries again on the next tick.

use crate::float_types::Real;

/// All the conditions that stop a rebuild from producing a mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NozzleError {
    /// The bell tangents at the throat exit and at the nozzle exit are parallel,
    /// so the Bézier control point does not exist.
    #[error(
        "(DegenerateGeometry) bell tangents are parallel: thetaN = {theta_n} rad, thetaE = {theta_e} rad"
    )]
    DegenerateGeometry { theta_n: Real, theta_e: Real },

    /// A revolution needs at least three frames to enclose a volume
    #[error("(TooFewSlices) revolution requires at least 3 slices, got {0}")]
    TooFewSlices(usize),

    /// An input parameter is NaN or infinite
    #[error("(InvalidParameter) {name} must be finite, got {value}")]
    InvalidParameter { name: &'static str, value: Real },

    /// The mesher was handed a curve without vertices
    #[error("(EmptyContour) cannot revolve a curve without vertices")]
    EmptyContour,
}
