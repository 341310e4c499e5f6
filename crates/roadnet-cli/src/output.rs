//! Output formatting for network summaries, node lists and routes.
//!
//! Every renderer returns a `String` so handlers decide where it goes; the
//! text variants live in [`text`].

mod text;

pub use text::{render_info_text, render_nodes_text, render_route_text};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use roadnet_lib::{Coordinate, Graph, NodeId, Route, RouteAlgorithm};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Sizes of the loaded and working graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub dataset: String,
    pub points: usize,
    pub ways: usize,
    pub road_ways: usize,
    pub skipped_elements: usize,
    pub full_nodes: usize,
    pub full_edges: usize,
    pub working_nodes: usize,
    pub working_edges: usize,
}

/// One step of a rendered route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub position: Option<Coordinate>,
    /// Length of the edge leading to this step; `None` for the origin.
    pub distance: Option<f64>,
}

/// Route enriched with coordinates and per-hop distances for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub origin: NodeId,
    pub destination: NodeId,
    pub hops: usize,
    pub total_length: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    pub fn from_route(route: &Route, graph: &Graph) -> Self {
        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| RouteStep {
                index,
                id,
                position: graph.position(id),
                distance: index
                    .checked_sub(1)
                    .and_then(|previous| graph.edge_length(route.steps[previous], id)),
            })
            .collect();

        Self {
            algorithm: route.algorithm,
            origin: route.origin,
            destination: route.destination,
            hops: route.hop_count(),
            total_length: route.total_length,
            steps,
        }
    }
}

pub fn render_info(info: &NetworkInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_info_text(info)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
    }
}

pub fn render_nodes(graph: &Graph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_nodes_text(graph)),
        OutputFormat::Json => {
            let ids: Vec<NodeId> = graph.node_ids().collect();
            Ok(serde_json::to_string_pretty(&ids)?)
        }
    }
}

pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_route_text(summary, palette)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}
