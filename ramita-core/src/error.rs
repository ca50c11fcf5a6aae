//! Error types for the ramita core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias. Each enum carries a stable machine-readable code for logging and
//! metrics surfaces.

use thiserror::Error;

/// Errors raised while validating or constructing an [`crate::AdjacencyMatrix`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MatrixError {
    /// The matrix had no vertices.
    #[error("adjacency matrix must have at least one vertex")]
    Empty,
    /// A row had a length different from the number of rows.
    #[error("row {row} has length {len}, but the matrix has {order} rows")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Number of rows supplied.
        order: usize,
    },
    /// An entry was neither 0 nor 1.
    #[error("entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The rejected value.
        value: u8,
    },
    /// Entries `(i, j)` and `(j, i)` disagreed.
    #[error("entries ({row}, {column}) and ({column}, {row}) disagree")]
    Asymmetric {
        /// Row of the first of the two mismatched entries.
        row: usize,
        /// Column of the first of the two mismatched entries.
        column: usize,
    },
    /// A diagonal entry was set, encoding a self-loop.
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop {
        /// The vertex carrying the self-loop.
        vertex: usize,
    },
    /// An edge referenced a vertex outside `0..order`.
    #[error("edge references vertex {vertex}, but the matrix order is {order}")]
    VertexOutOfBounds {
        /// The out-of-range vertex id.
        vertex: usize,
        /// Number of vertices in the matrix.
        order: usize,
    },
}

impl MatrixError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MatrixErrorCode {
        match self {
            Self::Empty => MatrixErrorCode::Empty,
            Self::NotSquare { .. } => MatrixErrorCode::NotSquare,
            Self::InvalidEntry { .. } => MatrixErrorCode::InvalidEntry,
            Self::Asymmetric { .. } => MatrixErrorCode::Asymmetric,
            Self::SelfLoop { .. } => MatrixErrorCode::SelfLoop,
            Self::VertexOutOfBounds { .. } => MatrixErrorCode::VertexOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`MatrixError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MatrixErrorCode {
    /// The matrix had no vertices.
    Empty,
    /// A row had a length different from the number of rows.
    NotSquare,
    /// An entry was neither 0 nor 1.
    InvalidEntry,
    /// Entries `(i, j)` and `(j, i)` disagreed.
    Asymmetric,
    /// A diagonal entry was set.
    SelfLoop,
    /// An edge referenced a vertex outside the matrix.
    VertexOutOfBounds,
}

impl MatrixErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "MATRIX_EMPTY",
            Self::NotSquare => "MATRIX_NOT_SQUARE",
            Self::InvalidEntry => "MATRIX_INVALID_ENTRY",
            Self::Asymmetric => "MATRIX_ASYMMETRIC",
            Self::SelfLoop => "MATRIX_SELF_LOOP",
            Self::VertexOutOfBounds => "MATRIX_VERTEX_OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while sampling a spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SamplerError {
    /// The input graph was not connected, so no spanning tree exists.
    ///
    /// Connectivity is a caller precondition; the sampler fails fast instead
    /// of walking forever inside an unreachable component.
    #[error("graph is not connected: vertex {vertex} is unreachable from vertex 0")]
    DisconnectedGraph {
        /// A vertex outside the component containing vertex 0.
        vertex: usize,
    },
}

impl SamplerError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SamplerErrorCode {
        match self {
            Self::DisconnectedGraph { .. } => SamplerErrorCode::DisconnectedGraph,
        }
    }
}

/// Machine-readable error codes for [`SamplerError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SamplerErrorCode {
    /// The input graph was not connected.
    DisconnectedGraph,
}

impl SamplerErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisconnectedGraph => "SAMPLER_DISCONNECTED_GRAPH",
        }
    }
}

/// Convenient alias for results returned by the sampling API.
pub type Result<T> = core::result::Result<T, SamplerError>;
