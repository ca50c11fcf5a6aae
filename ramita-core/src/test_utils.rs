//! Shared graph fixtures and invariant checks for unit tests.

use rand::{SeedableRng, rngs::SmallRng};

use crate::{matrix::AdjacencyMatrix, wilson};

/// The complete graph on `order` vertices.
pub(crate) fn complete_graph(order: usize) -> AdjacencyMatrix {
    let edges = (0..order).flat_map(|u| ((u + 1)..order).map(move |v| (u, v)));
    AdjacencyMatrix::from_edges(order, edges).expect("complete graph must be valid")
}

/// The `size x size` planar grid with row-major vertex indices.
pub(crate) fn planar_grid(size: usize) -> AdjacencyMatrix {
    let mut edges = Vec::new();
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
    AdjacencyMatrix::from_edges(size * size, edges).expect("grid must be valid")
}

/// A spanning tree of `graph` drawn with a fixed seed.
pub(crate) fn spanning_tree_of(graph: &AdjacencyMatrix, seed: u64) -> AdjacencyMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    wilson::spanning_tree(graph, &mut rng).expect("fixture graphs are connected")
}

/// Returns whether `tree` is a spanning tree of `graph`: same order, the
/// right edge count, every edge drawn from `graph`, and full reachability.
pub(crate) fn spans(graph: &AdjacencyMatrix, tree: &AdjacencyMatrix) -> bool {
    if tree.order() != graph.order() {
        return false;
    }
    if tree.edge_count() != tree.order().saturating_sub(1) {
        return false;
    }
    for u in 0..tree.order() {
        for v in (u + 1)..tree.order() {
            if tree.has_edge(u, v) && !graph.has_edge(u, v) {
                return false;
            }
        }
    }
    tree.is_connected()
}
