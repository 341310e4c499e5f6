//! Random down-sampling of large road graphs.
//!
//! Sampling a sparse road network breaks it into many islands, so callers
//! that want usable query results follow [`sample`] with
//! [`largest_component`]; [`working_graph`] does both.

use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Node budget used by the interactive front-end when none is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 1500;

/// Sample at most `n` nodes using the thread-local random generator.
pub fn sample(graph: &Graph, n: usize) -> Graph {
    sample_with_rng(graph, n, &mut rand::rng())
}

/// Sample at most `n` nodes uniformly without replacement and return the
/// node-induced subgraph.
///
/// Graphs with `n` nodes or fewer are returned as-is. Identifiers are drawn
/// from the sorted id list, so a seeded generator gives a reproducible sample.
pub fn sample_with_rng<R: Rng + ?Sized>(graph: &Graph, n: usize, rng: &mut R) -> Graph {
    if graph.node_count() <= n {
        return graph.clone();
    }

    let ids: Vec<NodeId> = graph.node_ids().collect();
    let chosen: HashSet<NodeId> = index::sample(rng, ids.len(), n)
        .into_iter()
        .map(|position| ids[position])
        .collect();

    let sampled = graph.induced_subgraph(&chosen);
    debug!(
        from = graph.node_count(),
        nodes = sampled.node_count(),
        edges = sampled.edge_count(),
        "sampled road graph"
    );
    sampled
}

/// Connected components, largest first.
///
/// Each component is sorted by identifier; components of equal size are
/// ordered by their smallest identifier.
pub fn connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut seen: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
    let mut components = Vec::new();

    for seed in graph.node_ids() {
        if !seen.insert(seed) {
            continue;
        }

        let mut component = vec![seed];
        let mut queue = VecDeque::from([seed]);
        while let Some(current) = queue.pop_front() {
            for edge in graph.neighbours(current) {
                if seen.insert(edge.target) {
                    component.push(edge.target);
                    queue.push_back(edge.target);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    // Seeds are visited in ascending order and the sort is stable.
    components.sort_by_key(|component| Reverse(component.len()));
    components
}

/// Induced subgraph over the largest connected component.
///
/// An empty graph yields an empty graph.
pub fn largest_component(graph: &Graph) -> Graph {
    let Some(largest) = connected_components(graph).into_iter().next() else {
        return Graph::default();
    };
    if largest.len() == graph.node_count() {
        return graph.clone();
    }

    let keep: HashSet<NodeId> = largest.into_iter().collect();
    graph.induced_subgraph(&keep)
}

/// Sample down to `n` nodes, then keep only the largest component.
pub fn working_graph<R: Rng + ?Sized>(graph: &Graph, n: usize, rng: &mut R) -> Graph {
    let sampled = sample_with_rng(graph, n, rng);
    let working = largest_component(&sampled);
    debug!(
        nodes = working.node_count(),
        edges = working.edge_count(),
        "working graph ready"
    );
    working
}
