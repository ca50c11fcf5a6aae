//! Wilson's loop-erased random walk over an adjacency matrix.
//!
//! The sampler partitions vertices into visited and unvisited sets, then
//! repeatedly walks from an unvisited vertex until it hits the visited set.
//! The walk records a successor pointer per vertex; revisiting a vertex
//! overwrites its pointer, which erases any traversed loop without ever
//! inspecting the path. Committing the resulting simple path grows the tree
//! by one branch. The distribution over spanning trees is uniform and does
//! not depend on the root choice.

use rand::{Rng, rngs::SmallRng};

use crate::{error::SamplerError, matrix::AdjacencyMatrix};

/// Draws a uniform spanning tree of `graph`, returned as a fresh matrix on
/// the same vertex set.
///
/// Fails with [`SamplerError::DisconnectedGraph`] before walking when some
/// vertex is unreachable from vertex 0; a walk started inside a component
/// that cannot reach the visited set would otherwise never terminate.
pub(crate) fn spanning_tree(
    graph: &AdjacencyMatrix,
    rng: &mut SmallRng,
) -> Result<AdjacencyMatrix, SamplerError> {
    if let Some(vertex) = graph.first_unreachable() {
        return Err(SamplerError::DisconnectedGraph { vertex });
    }

    let order = graph.order();
    let mut tree = AdjacencyMatrix::zeroed(order);

    let neighbours: Vec<Vec<usize>> = (0..order)
        .map(|vertex| graph.neighbors(vertex).collect())
        .collect();

    let mut visited = vec![false; order];
    let mut unvisited: Vec<usize> = (0..order).collect();

    // The implicit root: removed up front so the first walk has a target.
    let root = unvisited.swap_remove(rng.gen_range(0..unvisited.len()));
    visited[root] = true;

    // Successor pointers for the current walk segment. Overwriting an entry
    // on revisit is the loop erasure.
    let mut path: Vec<Option<usize>> = vec![None; order];

    while !unvisited.is_empty() {
        let start = unvisited[rng.gen_range(0..unvisited.len())];

        let mut current = start;
        loop {
            let candidates = &neighbours[current];
            let next = *candidates
                .get(rng.gen_range(0..candidates.len().max(1)))
                .ok_or(SamplerError::DisconnectedGraph { vertex: current })?;
            path[current] = Some(next);
            current = next;
            if visited[current] {
                break;
            }
        }

        // Commit the loop-free path from the walk start to the visited set.
        let mut cursor = start;
        while let Some(next) = path[cursor] {
            visited[cursor] = true;
            if let Some(slot) = unvisited.iter().position(|&vertex| vertex == cursor) {
                unvisited.swap_remove(slot);
            }
            tree.set_edge(cursor, next);
            cursor = next;
            if visited[cursor] {
                break;
            }
        }

        path.fill(None);
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{complete_graph, planar_grid, spans};

    fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[rstest]
    #[case::k4(complete_graph(4))]
    #[case::k7(complete_graph(7))]
    #[case::grid(planar_grid(3))]
    fn produces_a_spanning_tree(#[case] graph: AdjacencyMatrix) {
        for seed in 0..20 {
            let tree = spanning_tree(&graph, &mut seeded(seed)).expect("graph is connected");
            assert_eq!(tree.edge_count(), graph.order() - 1);
            assert!(spans(&graph, &tree));
        }
    }

    #[test]
    fn single_vertex_needs_no_walk() {
        let graph = complete_graph(1);
        let tree = spanning_tree(&graph, &mut seeded(0)).expect("trivial graph must succeed");
        assert_eq!(tree.order(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn two_vertices_yield_the_only_edge() {
        let graph = complete_graph(2);
        let tree = spanning_tree(&graph, &mut seeded(5)).expect("graph is connected");
        assert!(tree.has_edge(0, 1));
        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn tree_edges_come_from_the_source_graph() {
        let graph = planar_grid(4);
        let tree = spanning_tree(&graph, &mut seeded(9)).expect("graph is connected");
        for u in 0..tree.order() {
            for v in (u + 1)..tree.order() {
                if tree.has_edge(u, v) {
                    assert!(graph.has_edge(u, v), "edge ({u}, {v}) is not in the grid");
                }
            }
        }
    }

    #[test]
    fn rejects_two_component_input() {
        let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (2, 3)]).expect("valid edge list");
        let result = spanning_tree(&graph, &mut seeded(1));
        assert!(matches!(
            result,
            Err(SamplerError::DisconnectedGraph { vertex: 2 })
        ));
    }

    #[test]
    fn rejects_isolated_vertex() {
        let graph = AdjacencyMatrix::from_edges(3, [(0, 1)]).expect("valid edge list");
        let result = spanning_tree(&graph, &mut seeded(1));
        assert!(matches!(
            result,
            Err(SamplerError::DisconnectedGraph { vertex: 2 })
        ));
    }

    #[test]
    fn identical_seeds_reproduce_the_tree() {
        let graph = planar_grid(4);
        let first = spanning_tree(&graph, &mut seeded(77)).expect("graph is connected");
        let second = spanning_tree(&graph, &mut seeded(77)).expect("graph is connected");
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let graph = complete_graph(8);
        let reference = spanning_tree(&graph, &mut seeded(0)).expect("graph is connected");
        let varied = (1..50)
            .any(|seed| spanning_tree(&graph, &mut seeded(seed)).expect("connected") != reference);
        assert!(varied, "50 seeds produced the same tree on K8");
    }
}
