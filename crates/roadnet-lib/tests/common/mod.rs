//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests:
//! the checked-in export fixture and small hand-built graphs.

use std::path::PathBuf;

use roadnet_lib::{load_network_from_path, Graph, GraphBuilder, Node, NodeId};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Road graph built from `small_export.json`.
///
/// Roads: 1-2-3-4 (residential), 1-5-7 (primary), 4-7 (service). Node 8 is
/// only reachable over a railway, node 6 over a stream or an untagged way,
/// and node 9 is not referenced by any way.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    load_network_from_path(&fixtures_dir().join("small_export.json")).expect("fixture loads")
}

/// Build a graph from `(id, lat, lon)` nodes and undirected links.
#[allow(dead_code)]
pub fn graph_from(nodes: &[(NodeId, f64, f64)], links: &[(NodeId, NodeId)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for &(id, lat, lon) in nodes {
        builder.add_node(Node::transit(id, lat, lon));
    }
    for &(a, b) in links {
        builder.add_edge(a, b);
    }
    builder.build()
}

/// Sorted `(a, b)` pairs of every edge.
#[allow(dead_code)]
pub fn edge_pairs(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut pairs: Vec<_> = graph.edges().map(|(a, b, _)| (a, b)).collect();
    pairs.sort_unstable();
    pairs
}
