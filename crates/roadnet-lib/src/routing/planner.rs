//! Route planning strategies.
//!
//! The `RoutePlanner` trait wraps one search algorithm each, so
//! [`plan_route`](super::plan_route) can pick one at runtime while endpoint
//! validation and length bookkeeping stay in one place.

use crate::graph::{Graph, NodeId};
use crate::path::{find_route_a_star, find_route_bfs};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>>;
}

/// Breadth-first search planner.
///
/// Finds the path with the fewest edges; edge lengths are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        find_route_bfs(graph, start, goal)
    }
}

/// A* planner using great-circle distance to the goal as heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        find_route_a_star(graph, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
