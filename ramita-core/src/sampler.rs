//! Sampling orchestration: seeds the RNG, runs the loop-erased walk, and
//! densifies the resulting tree.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::instrument;

use crate::{
    Result, cycles,
    matrix::AdjacencyMatrix,
    tree::SampledTree,
    wilson,
};

/// Entry point for drawing spanning trees from a graph.
///
/// Each [`TreeSampler::sample`] call is an independent draw: all mutable
/// state lives inside the call, so a sampler can be shared freely and reused
/// across graphs. With a fixed seed every call reproduces the same output
/// for the same input.
///
/// # Examples
/// ```
/// use ramita_core::{AdjacencyMatrix, SamplerBuilder};
///
/// let k4 = AdjacencyMatrix::from_edges(
///     4,
///     [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
/// )?;
/// let sampler = SamplerBuilder::new().with_seed(11).build();
/// let tree = sampler.sample(&k4)?;
/// assert_eq!(tree.edge_count(), 3);
/// assert!(tree.matrix().is_connected());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeSampler {
    extra_edges: usize,
    seed: Option<u64>,
}

impl TreeSampler {
    pub(crate) const fn new(extra_edges: usize, seed: Option<u64>) -> Self {
        Self { extra_edges, seed }
    }

    /// Returns the extra-edge request applied after tree construction.
    #[must_use]
    pub const fn extra_edges(&self) -> usize {
        self.extra_edges
    }

    /// Returns the fixed seed, or `None` when seeding from entropy.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Samples a uniform spanning tree of `graph` and adds the configured
    /// number of extra edges, capped by the graph's spare edge capacity.
    ///
    /// # Errors
    /// Returns [`crate::SamplerError::DisconnectedGraph`] when `graph` is not
    /// connected; no partial result is produced.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::{AdjacencyMatrix, SamplerBuilder};
    ///
    /// let square = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])?;
    /// let sampler = SamplerBuilder::new().with_extra_edges(10).with_seed(3).build();
    /// let tree = sampler.sample(&square)?;
    /// // A 4-cycle has one spare edge beyond its spanning trees.
    /// assert_eq!(tree.tree_edge_count(), 3);
    /// assert_eq!(tree.extra_edge_count(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "core.sample",
        err,
        skip(self, graph),
        fields(
            order = graph.order(),
            extra_edges = self.extra_edges,
            seed = ?self.seed,
        ),
    )]
    pub fn sample(&self, graph: &AdjacencyMatrix) -> Result<SampledTree> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut matrix = wilson::spanning_tree(graph, &mut rng)?;
        let tree_edges = matrix.edge_count();
        let extra_edges =
            cycles::add_extra_edges(&mut matrix, graph.edge_count(), self.extra_edges, &mut rng);

        Ok(SampledTree::new(matrix, tree_edges, extra_edges))
    }
}
