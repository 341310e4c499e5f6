//! Info command handler reporting the size of the loaded road graph.

use anyhow::Result;

use crate::commands::load_working_network;
use crate::config::NetworkSettings;
use crate::output::{render_info, NetworkInfo, OutputFormat};

/// Handle the info subcommand.
pub fn handle_info_command(settings: &NetworkSettings, format: OutputFormat) -> Result<()> {
    let network = load_working_network(settings)?;
    let info = NetworkInfo {
        dataset: settings.dataset.display().to_string(),
        points: network.summary.points,
        ways: network.summary.ways,
        road_ways: network.summary.road_ways,
        skipped_elements: network.summary.skipped_elements,
        full_nodes: network.full.node_count(),
        full_edges: network.full.edge_count(),
        working_nodes: network.graph.node_count(),
        working_edges: network.graph.edge_count(),
    };
    println!("{}", render_info(&info, format)?);
    Ok(())
}
