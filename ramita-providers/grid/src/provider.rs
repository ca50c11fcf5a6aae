//! Grid graph construction over a fundamental region with seam
//! identification.

use ramita_core::AdjacencyMatrix;

use crate::{
    errors::GridError,
    topology::{Seam, SurfaceTopology},
};

/// Produces the adjacency matrix of a `size x size` grid embedded on a
/// surface.
///
/// Vertices are indexed row-major over the fundamental region; the sphere
/// appends a north pole at `size * size` and a south pole after it.
///
/// # Examples
/// ```
/// use ramita_providers_grid::{GridGraphProvider, SurfaceTopology};
///
/// let provider = GridGraphProvider::new(3, SurfaceTopology::Torus)?;
/// let graph = provider.adjacency_matrix()?;
/// assert_eq!(graph.order(), 9);
/// assert_eq!(graph.edge_count(), 18);
/// assert!(graph.is_connected());
/// # Ok::<(), ramita_providers_grid::GridError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridGraphProvider {
    size: usize,
    topology: SurfaceTopology,
}

impl GridGraphProvider {
    /// Creates a provider for a `size x size` grid on `topology`.
    ///
    /// # Errors
    /// Returns [`GridError::SizeTooSmall`] when `size` is below the
    /// topology's minimum: 1 for the plane, 2 for every identified surface.
    pub const fn new(size: usize, topology: SurfaceTopology) -> Result<Self, GridError> {
        let minimum = topology.minimum_size();
        if size < minimum {
            return Err(GridError::SizeTooSmall {
                size,
                minimum,
                topology,
            });
        }
        Ok(Self { size, topology })
    }

    /// Returns the grid side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the surface topology.
    #[must_use]
    pub const fn topology(&self) -> SurfaceTopology {
        self.topology
    }

    /// Returns the number of vertices the produced matrix will have:
    /// `size * size`, plus two poles on the sphere.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        let region = self.size * self.size;
        if self.topology.has_poles() {
            region + 2
        } else {
            region
        }
    }

    /// Builds the adjacency matrix: the planar grid over the fundamental
    /// region, then the topology's seam identifications.
    ///
    /// # Errors
    /// Returns [`GridError::Matrix`] if the assembled edge list is rejected;
    /// with a validated size this does not occur.
    pub fn adjacency_matrix(&self) -> Result<AdjacencyMatrix, GridError> {
        let mut edges = self.base_grid_edges();
        self.push_vertical_seam(&mut edges);
        self.push_horizontal_closure(&mut edges);
        AdjacencyMatrix::from_edges(self.vertex_count(), edges).map_err(GridError::from)
    }

    /// Right and down adjacencies inside the fundamental region.
    fn base_grid_edges(&self) -> Vec<(usize, usize)> {
        let size = self.size;
        let mut edges = Vec::with_capacity(2 * size * size);
        for row in 0..size {
            for column in 0..size {
                let vertex = row * size + column;
                if column + 1 < size {
                    edges.push((vertex, vertex + 1));
                }
                if row + 1 < size {
                    edges.push((vertex, vertex + size));
                }
            }
        }
        edges
    }

    /// Glues the last column to the first, straight or reversed.
    fn push_vertical_seam(&self, edges: &mut Vec<(usize, usize)>) {
        let Some(seam) = self.topology.vertical_seam() else {
            return;
        };
        let size = self.size;
        for row in 0..size {
            let partner_row = match seam {
                Seam::Straight => row,
                Seam::Reversed => size - 1 - row,
            };
            edges.push((row * size + size - 1, partner_row * size));
        }
    }

    /// Closes the horizontal boundary: a seam to the first row, or pole
    /// vertices on the sphere.
    fn push_horizontal_closure(&self, edges: &mut Vec<(usize, usize)>) {
        let size = self.size;
        if self.topology.has_poles() {
            let north = size * size;
            let south = north + 1;
            for column in 0..size {
                edges.push((column, north));
                edges.push(((size - 1) * size + column, south));
            }
            return;
        }
        let Some(seam) = self.topology.horizontal_seam() else {
            return;
        };
        for column in 0..size {
            let partner_column = match seam {
                Seam::Straight => column,
                Seam::Reversed => size - 1 - column,
            };
            edges.push(((size - 1) * size + column, partner_column));
        }
    }
}
