//! Nodes command handler listing the identifiers available for routing.

use anyhow::Result;

use crate::commands::load_working_network;
use crate::config::NetworkSettings;
use crate::output::{render_nodes, OutputFormat};

/// Handle the nodes subcommand.
pub fn handle_nodes_command(settings: &NetworkSettings, format: OutputFormat) -> Result<()> {
    let network = load_working_network(settings)?;
    println!("{}", render_nodes(&network.graph, format)?);
    Ok(())
}
