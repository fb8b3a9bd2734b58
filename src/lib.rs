//! Rocket **bell nozzle** geometry: an empirical wall-angle model and a
//! quadratic-Bézier bell produce a closed 2D wall contour, which is revolved
//! about the nozzle axis into a watertight triangle mesh with normals and UVs.
//!
//! ```
//! use bellnozzle::nozzle::{BellNozzle, LengthClass, NozzleParameters};
//! use bellnozzle::revolve::RevolveOptions;
//!
//! let params = NozzleParameters::new(20.0, 1.0, LengthClass::Normal).with_vertex_counts(10, 10);
//! let mesh = BellNozzle::new(params, RevolveOptions::new(8)).rebuild().unwrap();
//! assert_eq!(mesh.buffers.vertex_count(), mesh.curve.len() * 8);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: use hashbrown in manifold analysis
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to fill revolution slices concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod curve;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod nozzle;
pub mod revolve;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use curve::CurveData;
pub use errors::NozzleError;
pub use mesh::MeshBuffers;
pub use nozzle::{BellNozzle, NozzleMesh, NozzleParameters, rebuild};
