//! Error types for the grid graph provider.

use thiserror::Error;

use ramita_core::MatrixError;

use crate::topology::SurfaceTopology;

/// Errors raised while configuring or building a grid graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    /// The requested grid side is too small for the topology's seams.
    #[error("{topology} requires a grid side of at least {minimum} (got {size})")]
    SizeTooSmall {
        /// The rejected side length.
        size: usize,
        /// Smallest side the topology supports.
        minimum: usize,
        /// The topology that was requested.
        topology: SurfaceTopology,
    },
    /// The assembled edge list was rejected by the matrix constructor.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl GridError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GridErrorCode {
        match self {
            Self::SizeTooSmall { .. } => GridErrorCode::SizeTooSmall,
            Self::Matrix(_) => GridErrorCode::Matrix,
        }
    }
}

/// Machine-readable error codes for [`GridError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GridErrorCode {
    /// The requested grid side is too small for the topology.
    SizeTooSmall,
    /// The assembled edge list was rejected by the matrix constructor.
    Matrix,
}

impl GridErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SizeTooSmall => "GRID_SIZE_TOO_SMALL",
            Self::Matrix => "GRID_MATRIX_REJECTED",
        }
    }
}
