use std::fmt::Write;

use roadnet_lib::Graph;

use super::{NetworkInfo, RouteStep, RouteSummary};
use crate::terminal::{format_meters, format_with_separators, ColorPalette};

/// Render the graph sizes as plain text.
pub fn render_info_text(info: &NetworkInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dataset: {}", info.dataset);
    let _ = writeln!(
        out,
        "Elements: {} points, {} ways ({} roads), {} skipped",
        format_with_separators(info.points as u64),
        format_with_separators(info.ways as u64),
        format_with_separators(info.road_ways as u64),
        format_with_separators(info.skipped_elements as u64),
    );
    let _ = writeln!(
        out,
        "Full graph: {} nodes, {} edges",
        format_with_separators(info.full_nodes as u64),
        format_with_separators(info.full_edges as u64),
    );
    let _ = write!(
        out,
        "Working graph: {} nodes, {} edges",
        format_with_separators(info.working_nodes as u64),
        format_with_separators(info.working_edges as u64),
    );
    out
}

/// One node identifier per line, ascending.
pub fn render_nodes_text(graph: &Graph) -> String {
    graph
        .node_ids()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a route with start/goal tags and per-hop distances.
pub fn render_route_text(summary: &RouteSummary, palette: ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Route from {} to {} ({} hops; algorithm: {}):",
        summary.origin, summary.destination, summary.hops, summary.algorithm
    );

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (tag_color, tag) = if step.index == 0 {
            (palette.tag_start, "STRT")
        } else if step.index == last {
            (palette.tag_goal, "GOAL")
        } else {
            (palette.tag_step, "STEP")
        };
        let _ = writeln!(
            out,
            " {tag_color}{tag}{reset} {white}{id}{reset}{coords}{distance}",
            reset = palette.reset,
            white = palette.white_bold,
            id = step.id,
            coords = format_coordinates(step, palette),
            distance = format_hop(step, palette),
        );
    }

    let _ = write!(
        out,
        "\nTotal distance: {} m",
        format_meters(summary.total_length)
    );
    out
}

fn format_coordinates(step: &RouteStep, palette: ColorPalette) -> String {
    match step.position {
        Some(position) => format!(
            " {}({:.5}, {:.5}){}",
            palette.gray, position.lat, position.lon, palette.reset
        ),
        None => String::new(),
    }
}

fn format_hop(step: &RouteStep, palette: ColorPalette) -> String {
    match step.distance {
        Some(distance) => format!(
            " {}+{} m{}",
            palette.green,
            format_meters(distance),
            palette.reset
        ),
        None => String::new(),
    }
}
