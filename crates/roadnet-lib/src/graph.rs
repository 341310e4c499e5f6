use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::geo::Coordinate;

/// Numeric identifier for a point of the raw dataset.
pub type NodeId = i64;

/// Category tag carried by every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Intersection or shape point a route can pass through.
    #[default]
    Transit,
}

/// Graph vertex backed by one point of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Coordinate,
    pub kind: NodeKind,
}

impl Node {
    /// Create a transit node at the given latitude/longitude.
    pub fn transit(id: NodeId, lat: f64, lon: f64) -> Self {
        Self {
            id,
            position: Coordinate::new(lat, lon),
            kind: NodeKind::Transit,
        }
    }
}

/// Adjacency entry within the road graph.
///
/// Every undirected edge is stored once in the list of each endpoint with
/// the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    /// Great-circle distance between the endpoints in meters.
    pub length: f64,
}

/// Undirected, simple road graph used by the pathfinding algorithms.
///
/// The graph is immutable once built; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<BTreeMap<NodeId, Node>>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Whether `id` is a node of this graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Coordinates of a node, if present.
    pub fn position(&self, id: NodeId) -> Option<Coordinate> {
        self.nodes.get(&id).map(|node| node.position)
    }

    /// Return the neighbours for a given node identifier.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of the edge between `a` and `b`, if they are adjacent.
    pub fn edge_length(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.length)
    }

    /// All node identifiers in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every undirected edge exactly once as `(a, b, length)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes.keys().flat_map(move |&id| {
            self.neighbours(id)
                .iter()
                .filter(move |edge| edge.target > id)
                .map(move |edge| (id, edge.target, edge.length))
        })
    }

    /// Sum of the edge lengths along `steps`.
    ///
    /// Returns `None` when two consecutive steps are not adjacent.
    pub fn path_length(&self, steps: &[NodeId]) -> Option<f64> {
        steps
            .windows(2)
            .map(|pair| self.edge_length(pair[0], pair[1]))
            .sum()
    }

    /// Build the node-induced subgraph over `keep` as a new graph.
    ///
    /// Identifiers in `keep` that are not nodes of this graph are ignored.
    /// Neighbour order of the surviving edges is preserved.
    pub fn induced_subgraph(&self, keep: &HashSet<NodeId>) -> Graph {
        let nodes: BTreeMap<NodeId, Node> = self
            .nodes
            .iter()
            .filter(|(id, _)| keep.contains(id))
            .map(|(&id, node)| (id, node.clone()))
            .collect();

        let adjacency: HashMap<NodeId, Vec<Edge>> = nodes
            .keys()
            .map(|&id| {
                let edges = self
                    .neighbours(id)
                    .iter()
                    .filter(|edge| keep.contains(&edge.target))
                    .cloned()
                    .collect();
                (id, edges)
            })
            .collect();

        Graph {
            nodes: Arc::new(nodes),
            adjacency: Arc::new(adjacency),
        }
    }
}

/// Incremental constructor enforcing the simple-graph invariants.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
    links: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node with the same identifier.
    ///
    /// Nodes must be added before the edges that reference them, since edge
    /// lengths are fixed at creation.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id, node)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Connect `a` and `b` with an edge weighted by their great-circle distance.
    ///
    /// Returns `false` without changing the graph when either endpoint is
    /// unknown, when `a == b`, or when the two nodes are already connected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }
        let (Some(from), Some(to)) = (self.nodes.get(&a), self.nodes.get(&b)) else {
            return false;
        };
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.links.insert(key) {
            return false;
        }

        let length = from.position.distance_to(&to.position);
        self.adjacency
            .entry(a)
            .or_default()
            .push(Edge { target: b, length });
        self.adjacency
            .entry(b)
            .or_default()
            .push(Edge { target: a, length });
        true
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: Arc::new(self.nodes),
            adjacency: Arc::new(self.adjacency),
        }
    }
}
