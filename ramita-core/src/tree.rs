//! Result type for sampled spanning trees.

use crate::matrix::AdjacencyMatrix;

/// The output of a [`crate::TreeSampler::sample`] invocation: a spanning
/// tree plus any extra edges, with the two contributions counted separately.
///
/// # Examples
/// ```
/// use ramita_core::{AdjacencyMatrix, SamplerBuilder};
///
/// let triangle = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// let tree = SamplerBuilder::new().with_extra_edges(5).with_seed(1).build()
///     .sample(&triangle)?;
/// assert_eq!(tree.tree_edge_count(), 2);
/// assert_eq!(tree.extra_edge_count(), 1);
/// assert_eq!(tree.edge_count(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SampledTree {
    matrix: AdjacencyMatrix,
    tree_edges: usize,
    extra_edges: usize,
}

impl SampledTree {
    pub(crate) const fn new(
        matrix: AdjacencyMatrix,
        tree_edges: usize,
        extra_edges: usize,
    ) -> Self {
        Self {
            matrix,
            tree_edges,
            extra_edges,
        }
    }

    /// Returns the tree-plus-extras adjacency matrix.
    #[must_use]
    pub const fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Consumes the result, yielding the adjacency matrix.
    #[must_use]
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }

    /// Returns the number of spanning-tree edges: `order - 1`, or zero for a
    /// single-vertex graph.
    #[must_use]
    pub const fn tree_edge_count(&self) -> usize {
        self.tree_edges
    }

    /// Returns how many extra edges were actually added after clamping.
    #[must_use]
    pub const fn extra_edge_count(&self) -> usize {
        self.extra_edges
    }

    /// Returns the total undirected edge count of the result.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }
}
