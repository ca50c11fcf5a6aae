//! Property-based suite for the sampling pipeline.
//!
//! Graphs are generated as a random tree (guaranteeing connectivity) plus a
//! sprinkle of chords, so every case is a valid sampler input and the
//! expected edge totals can be computed exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AdjacencyMatrix, SamplerBuilder};

const MIN_ORDER: usize = 2;
const MAX_ORDER: usize = 16;

/// Builds a connected graph: a uniform random attachment tree with up to
/// `chords` additional random edges.
fn generate_connected(order: usize, chords: usize, rng: &mut SmallRng) -> AdjacencyMatrix {
    let mut edges: Vec<(usize, usize)> = (1..order)
        .map(|vertex| (vertex, rng.gen_range(0..vertex)))
        .collect();
    for _ in 0..chords {
        let u = rng.gen_range(0..order);
        let v = rng.gen_range(0..order);
        if u != v {
            edges.push((u, v));
        }
    }
    AdjacencyMatrix::from_edges(order, edges).expect("generated graphs are valid")
}

fn connected_graph() -> impl Strategy<Value = AdjacencyMatrix> {
    (MIN_ORDER..=MAX_ORDER, 0usize..20, any::<u64>()).prop_map(|(order, chords, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_connected(order, chords, &mut rng)
    })
}

proptest! {
    #[test]
    fn totals_match_the_clamped_request(
        graph in connected_graph(),
        request in 0usize..40,
        seed in any::<u64>(),
    ) {
        let sampler = SamplerBuilder::new()
            .with_extra_edges(request)
            .with_seed(seed)
            .build();
        let tree = sampler.sample(&graph).expect("generated graphs are connected");
        let spare = graph.edge_count() - (graph.order() - 1);
        prop_assert_eq!(tree.tree_edge_count(), graph.order() - 1);
        prop_assert_eq!(tree.extra_edge_count(), request.min(spare));
        prop_assert_eq!(tree.edge_count(), graph.order() - 1 + request.min(spare));
    }

    #[test]
    fn results_stay_simple_and_connected(
        graph in connected_graph(),
        seed in any::<u64>(),
    ) {
        let tree = SamplerBuilder::new()
            .with_extra_edges(3)
            .with_seed(seed)
            .build()
            .sample(&graph)
            .expect("generated graphs are connected");
        let matrix = tree.matrix();
        for u in 0..matrix.order() {
            prop_assert!(!matrix.has_edge(u, u));
            for v in 0..matrix.order() {
                prop_assert_eq!(matrix.has_edge(u, v), matrix.has_edge(v, u));
            }
        }
        prop_assert!(matrix.is_connected());
    }

    #[test]
    fn fixed_seeds_reproduce(graph in connected_graph(), seed in any::<u64>()) {
        let sampler = SamplerBuilder::new()
            .with_extra_edges(2)
            .with_seed(seed)
            .build();
        let first = sampler.sample(&graph).expect("generated graphs are connected");
        let second = sampler.sample(&graph).expect("generated graphs are connected");
        prop_assert_eq!(first, second);
    }
}
