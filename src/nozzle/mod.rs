//! Bell nozzle pipeline: parameters → wall angles → contour → curve → revolved mesh.
//!
//! Every rebuild starts from scratch. Nothing is cached between calls, and the
//! only shared state is the read-only [`table::WALL_ANGLES`].

use crate::curve::CurveData;
use crate::errors::NozzleError;
use crate::float_types::Real;
use crate::mesh::MeshBuffers;
use crate::revolve::{self, RevolveOptions};
use crate::traits::MeshTarget;
use nalgebra::Point3;

pub mod contour;
pub mod parameters;
pub mod solver;
pub mod table;

pub use contour::{BellCurve, Contour};
pub use parameters::{LengthClass, NozzleParameters};
pub use solver::{AngleSource, BellGeometry};

/// Everything one rebuild produces.
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleMesh {
    /// Parameters after range clamping
    pub parameters: NozzleParameters,
    pub geometry: BellGeometry,
    pub contour: Contour,
    /// Swept curve, also useful for drawing the profile
    pub curve: CurveData,
    pub buffers: MeshBuffers,
    pub slices: usize,
}

impl NozzleMesh {
    /// Positions of one slice of the revolved surface, in contour order.
    pub fn edge_loop(&self, slice: usize) -> Option<&[Point3<Real>]> {
        self.buffers.edge_loop(slice, self.curve.len())
    }
}

/// A configured nozzle that can be rebuilt on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BellNozzle {
    pub parameters: NozzleParameters,
    pub revolve: RevolveOptions,
}

impl BellNozzle {
    pub const fn new(parameters: NozzleParameters, revolve: RevolveOptions) -> Self {
        BellNozzle { parameters, revolve }
    }

    /// Solve the profile only, without meshing.
    pub fn profile(&self) -> Result<(NozzleParameters, BellGeometry, Contour), NozzleError> {
        let parameters = self.parameters.sanitized()?;
        let throat_radius = parameters.exit_radius / parameters.expansion_ratio.sqrt();
        let geometry = solver::solve(parameters.expansion_ratio, throat_radius, parameters.length_class);
        let contour = contour::build(&parameters, &geometry)?;
        Ok((parameters, geometry, contour))
    }

    /// Run the full pipeline.
    pub fn rebuild(&self) -> Result<NozzleMesh, NozzleError> {
        let (parameters, geometry, contour) = self.profile()?;
        let slices = self.revolve.sanitized().slices;

        let curve = CurveData::from(&contour);
        let path = revolve::revolution_path(slices);
        let buffers = revolve::extrude(&curve, &path)?;

        log::debug!(
            "rebuilt nozzle: ratio {}, {}% bell, thetaN {:.3} rad, thetaE {:.3} rad, {} vertices",
            parameters.expansion_ratio,
            geometry.length_class.percent(),
            geometry.theta_n,
            geometry.theta_e,
            buffers.vertex_count()
        );

        Ok(NozzleMesh {
            parameters,
            geometry,
            contour,
            curve,
            buffers,
            slices,
        })
    }

    /// Rebuild and hand the buffers to `target`.
    ///
    /// On error `target` keeps whatever it held before, so a host can skip
    /// this tick and show the previous mesh.
    pub fn rebuild_into<T: MeshTarget>(&self, target: &mut T) -> Result<BellGeometry, NozzleError> {
        match self.rebuild() {
            Ok(mesh) => {
                target.replace_with(mesh.buffers);
                Ok(mesh.geometry)
            },
            Err(err) => {
                log::warn!("nozzle rebuild skipped: {err}");
                Err(err)
            },
        }
    }
}

/// Build the mesh for `parameters` with the default 36 slices.
pub fn rebuild(parameters: &NozzleParameters) -> Result<NozzleMesh, NozzleError> {
    BellNozzle::new(*parameters, RevolveOptions::default()).rebuild()
}
