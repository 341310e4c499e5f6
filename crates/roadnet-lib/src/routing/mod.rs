//! Route planning over a road graph.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, A*)
//! - [`RouteRequest`] - Origin/destination query with an algorithm choice
//! - [`Route`] - Validated path plus its total length
//! - [`find_path_bfs`] / [`find_path_astar`] - Direct entry points
//! - [`plan_route`] - Request-driven entry point
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] implementation so the
//! validation and length bookkeeping in this module is shared between them.
//!
//! # Example
//!
//! ```ignore
//! use roadnet_lib::{load_network_from_path, plan_route, RouteRequest};
//!
//! let graph = load_network_from_path("export.json".as_ref())?;
//! let route = plan_route(&graph, &RouteRequest::a_star(101, 205))?;
//! println!("{} hops, {:.2} m", route.hop_count(), route.total_length);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, BfsPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest edges).
    Bfs,
    /// A* search guided by great-circle distance (shortest length).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "a-star" | "a_star" | "astar" | "a*" => Ok(RouteAlgorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: value.to_string(),
            }),
        }
    }
}

/// Origin/destination query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: NodeId,
    pub destination: NodeId,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for breadth-first routes.
    pub fn bfs(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
            algorithm: RouteAlgorithm::Bfs,
        }
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
            algorithm: RouteAlgorithm::AStar,
        }
    }
}

/// Route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub algorithm: RouteAlgorithm,
    pub origin: NodeId,
    pub destination: NodeId,
    pub steps: Vec<NodeId>,
    /// Sum of the traversed edge lengths in meters.
    pub total_length: f64,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Fewest-hops path between two nodes.
pub fn find_path_bfs(graph: &Graph, origin: NodeId, destination: NodeId) -> Result<Route> {
    plan_with(&BfsPlanner, graph, origin, destination)
}

/// Shortest-length path between two nodes.
pub fn find_path_astar(graph: &Graph, origin: NodeId, destination: NodeId) -> Result<Route> {
    plan_with(&AStarPlanner, graph, origin, destination)
}

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<Route> {
    let planner = select_planner(request.algorithm);
    plan_with(planner.as_ref(), graph, request.origin, request.destination)
}

/// Validate the endpoints, run the planner, and total up the path.
///
/// Endpoints missing from the graph yield [`Error::InvalidNodeReference`];
/// unreachable destinations yield [`Error::NoPathFound`].
pub fn plan_with(
    planner: &dyn RoutePlanner,
    graph: &Graph,
    origin: NodeId,
    destination: NodeId,
) -> Result<Route> {
    for id in [origin, destination] {
        if !graph.contains_node(id) {
            return Err(Error::InvalidNodeReference { id });
        }
    }

    let not_found = || Error::NoPathFound {
        origin,
        destination,
    };
    let steps = planner
        .find_path(graph, origin, destination)
        .ok_or_else(not_found)?;
    let total_length = graph.path_length(&steps).ok_or_else(not_found)?;

    debug!(
        algorithm = %planner.algorithm(),
        origin,
        destination,
        hops = steps.len().saturating_sub(1),
        total_length,
        "route found"
    );

    Ok(Route {
        algorithm: planner.algorithm(),
        origin,
        destination,
        steps,
        total_length,
    })
}
