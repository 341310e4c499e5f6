//! Randomized checks of the search guarantees against brute force.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadnet_lib::{find_path_astar, find_path_bfs, Error, Graph, NodeId};

use common::graph_from;

const NODES: usize = 12;

fn random_graph(rng: &mut StdRng) -> Graph {
    let nodes: Vec<(NodeId, f64, f64)> = (0..NODES as NodeId)
        .map(|id| {
            (
                id,
                -33.45 + rng.random_range(0.0..0.01),
                -70.66 + rng.random_range(0.0..0.01),
            )
        })
        .collect();
    let mut links = Vec::new();
    for a in 0..NODES as NodeId {
        for b in (a + 1)..NODES as NodeId {
            if rng.random_bool(0.25) {
                links.push((a, b));
            }
        }
    }
    graph_from(&nodes, &links)
}

/// All-pairs minimum (hops, length) via Floyd-Warshall.
fn all_pairs(graph: &Graph) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut hops = vec![vec![f64::INFINITY; NODES]; NODES];
    let mut lengths = vec![vec![f64::INFINITY; NODES]; NODES];
    for i in 0..NODES {
        hops[i][i] = 0.0;
        lengths[i][i] = 0.0;
    }
    for (a, b, length) in graph.edges() {
        let (a, b) = (a as usize, b as usize);
        hops[a][b] = 1.0;
        hops[b][a] = 1.0;
        lengths[a][b] = length;
        lengths[b][a] = length;
    }
    for k in 0..NODES {
        for i in 0..NODES {
            for j in 0..NODES {
                hops[i][j] = hops[i][j].min(hops[i][k] + hops[k][j]);
                lengths[i][j] = lengths[i][j].min(lengths[i][k] + lengths[k][j]);
            }
        }
    }
    (hops, lengths)
}

fn assert_walk(graph: &Graph, steps: &[NodeId], origin: NodeId, destination: NodeId) {
    assert_eq!(steps.first(), Some(&origin));
    assert_eq!(steps.last(), Some(&destination));
    for pair in steps.windows(2) {
        assert!(graph.edge_length(pair[0], pair[1]).is_some());
    }
}

#[test]
fn searches_are_optimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..40 {
        let graph = random_graph(&mut rng);
        let (hops, lengths) = all_pairs(&graph);

        for origin in 0..NODES {
            for destination in 0..NODES {
                let (o, d) = (origin as NodeId, destination as NodeId);
                let bfs = find_path_bfs(&graph, o, d);
                let a_star = find_path_astar(&graph, o, d);

                if hops[origin][destination].is_infinite() {
                    assert!(matches!(bfs, Err(Error::NoPathFound { .. })));
                    assert!(matches!(a_star, Err(Error::NoPathFound { .. })));
                    continue;
                }

                let bfs = bfs.expect("reachable");
                assert_walk(&graph, &bfs.steps, o, d);
                assert_eq!(bfs.hop_count() as f64, hops[origin][destination]);

                let a_star = a_star.expect("reachable");
                assert_walk(&graph, &a_star.steps, o, d);
                let best = lengths[origin][destination];
                assert!(
                    (a_star.total_length - best).abs() <= 1e-6 * best.max(1.0),
                    "{o}->{d}: {} vs optimum {best}",
                    a_star.total_length
                );
            }
        }
    }
}
