//! Grid graph provider: adjacency matrices of square grids embedded on
//! surfaces.
//!
//! A `size x size` grid is laid out over a fundamental region; the region's
//! boundary edges are then identified according to the chosen surface
//! topology (seams, and poles for the sphere). The produced matrices are
//! simple, symmetric, and connected, ready for the `ramita-core` sampler.

mod errors;
mod provider;
mod topology;

pub use errors::{GridError, GridErrorCode};
pub use provider::GridGraphProvider;
pub use topology::SurfaceTopology;
