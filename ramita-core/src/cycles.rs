//! Extra-edge ("cycle") addition on top of a sampled spanning tree.
//!
//! Candidate edges come from the complete graph on the tree's vertex set,
//! while the count cap comes from the source graph's edge budget beyond a
//! spanning tree. The two graphs differing is long-standing behaviour that
//! callers rely on; see DESIGN.md before changing it.

use rand::{Rng, rngs::SmallRng};
use tracing::info;

use crate::matrix::AdjacencyMatrix;

/// Adds up to `requested` edges to `tree`, drawn uniformly among vertex
/// pairs not already joined, and returns how many were added.
///
/// The effective count is `min(requested, source_edges - (order - 1))`,
/// clamped at zero. Edges are drawn by bounded rejection sampling; once the
/// attempt budget for an edge is exhausted the remainder is drawn from the
/// enumerated complement without replacement, so the procedure always
/// terminates.
pub(crate) fn add_extra_edges(
    tree: &mut AdjacencyMatrix,
    source_edges: usize,
    requested: usize,
    rng: &mut SmallRng,
) -> usize {
    let order = tree.order();
    let capacity = source_edges.saturating_sub(order.saturating_sub(1));
    let effective = requested.min(capacity);
    if effective == 0 {
        return 0;
    }
    if effective < requested {
        info!(requested, capacity, "clamping extra-edge request to capacity");
    }

    let attempt_budget = order.saturating_mul(order).max(16);
    let mut added = 0usize;
    while added < effective {
        let Some((u, v)) = draw_missing_pair(tree, attempt_budget, rng) else {
            break;
        };
        tree.set_edge(u, v);
        added += 1;
    }

    if added < effective {
        let remaining = effective - added;
        info!(remaining, "rejection budget spent, sampling the complement directly");
        added += sample_complement(tree, remaining, rng);
    }

    added
}

/// Rejection-samples a vertex pair that is neither a self-loop nor already
/// an edge of `tree`, giving up after `attempt_budget` draws.
fn draw_missing_pair(
    tree: &AdjacencyMatrix,
    attempt_budget: usize,
    rng: &mut SmallRng,
) -> Option<(usize, usize)> {
    let order = tree.order();
    for _ in 0..attempt_budget {
        let u = rng.gen_range(0..order);
        let v = rng.gen_range(0..order);
        if u != v && !tree.has_edge(u, v) {
            return Some((u, v));
        }
    }
    None
}

/// Draws `count` absent edges without replacement by enumerating the
/// complement of `tree` and running a partial Fisher-Yates shuffle.
fn sample_complement(tree: &mut AdjacencyMatrix, count: usize, rng: &mut SmallRng) -> usize {
    let order = tree.order();
    let mut candidates: Vec<(usize, usize)> = (0..order)
        .flat_map(|u| ((u + 1)..order).map(move |v| (u, v)))
        .filter(|&(u, v)| !tree.has_edge(u, v))
        .collect();

    let take = count.min(candidates.len());
    for slot in 0..take {
        let pick = rng.gen_range(slot..candidates.len());
        candidates.swap(slot, pick);
        let (u, v) = candidates[slot];
        tree.set_edge(u, v);
    }
    take
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{planar_grid, spanning_tree_of};

    fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[rstest]
    #[case::no_request(0, 0)]
    #[case::within_capacity(2, 2)]
    #[case::clamped(100, 4)]
    fn respects_the_capacity_clamp(#[case] requested: usize, #[case] expected: usize) {
        // A 3x3 planar grid has 12 edges; its spanning trees use 8.
        let grid = planar_grid(3);
        let mut tree = spanning_tree_of(&grid, 21);
        let added = add_extra_edges(&mut tree, grid.edge_count(), requested, &mut seeded(4));
        assert_eq!(added, expected);
        assert_eq!(tree.edge_count(), 8 + expected);
    }

    #[test]
    fn added_edges_are_new_and_loop_free() {
        let grid = planar_grid(3);
        let mut tree = spanning_tree_of(&grid, 8);
        let before = tree.clone();
        let added = add_extra_edges(&mut tree, grid.edge_count(), 4, &mut seeded(2));
        assert_eq!(added, 4);
        for u in 0..tree.order() {
            assert!(!tree.has_edge(u, u));
        }
        let mut fresh = 0;
        for u in 0..tree.order() {
            for v in (u + 1)..tree.order() {
                if tree.has_edge(u, v) && !before.has_edge(u, v) {
                    fresh += 1;
                }
            }
        }
        assert_eq!(fresh, 4);
    }

    #[test]
    fn spanning_tree_input_has_no_spare_capacity() {
        let grid = planar_grid(3);
        let tree = spanning_tree_of(&grid, 13);
        // The source graph here is the tree itself: 8 edges, zero spare.
        let mut copy = tree.clone();
        let added = add_extra_edges(&mut copy, tree.edge_count(), 50, &mut seeded(0));
        assert_eq!(added, 0);
        assert_eq!(copy, tree);
    }

    #[test]
    fn complement_fallback_fills_a_nearly_complete_matrix() {
        // K5 as source: capacity 10 - 4 = 6, exactly the complement of a
        // 5-vertex spanning tree. Every absent edge must get used.
        let k5 = crate::test_utils::complete_graph(5);
        let mut tree = spanning_tree_of(&k5, 3);
        let added = add_extra_edges(&mut tree, k5.edge_count(), 6, &mut seeded(8));
        assert_eq!(added, 6);
        assert_eq!(tree.edge_count(), 10);
    }

    #[test]
    fn direct_complement_sampling_matches_request() {
        let k5 = crate::test_utils::complete_graph(5);
        let mut tree = spanning_tree_of(&k5, 6);
        let taken = sample_complement(&mut tree, 2, &mut seeded(1));
        assert_eq!(taken, 2);
        assert_eq!(tree.edge_count(), 6);
    }
}
