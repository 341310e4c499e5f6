//! roadnet library entry points.
//!
//! This crate loads an OpenStreetMap-style JSON export into an undirected
//! road graph weighted by great-circle distance, optionally samples it down
//! to a bounded working set, and runs breadth-first and A* pathfinding over
//! it. Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod path;
pub mod routing;
pub mod sample;

pub use dataset::{
    load_network, load_network_from_path, load_network_from_reader, load_network_from_str,
    load_network_with, load_network_with_summary, parse_dataset, read_dataset, LoadSummary,
    LoaderOptions, RawDataset, RawElement, RawPoint, RawWay, DEFAULT_ROAD_TAG,
};
pub use error::{Error, Result};
pub use geo::{haversine_distance, Coordinate, EARTH_RADIUS_METERS};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeId, NodeKind};
pub use path::{find_route_a_star, find_route_bfs};
pub use routing::{
    find_path_astar, find_path_bfs, plan_route, plan_with, select_planner, AStarPlanner,
    BfsPlanner, Route, RouteAlgorithm, RoutePlanner, RouteRequest,
};
pub use sample::{
    connected_components, largest_component, sample, sample_with_rng, working_graph,
    DEFAULT_SAMPLE_SIZE,
};
