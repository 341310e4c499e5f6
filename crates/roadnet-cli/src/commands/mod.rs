// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches here.

pub mod info;
pub mod nodes;
pub mod route;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use roadnet_lib::{load_network_with_summary, read_dataset, working_graph, Graph, LoadSummary};

use crate::config::NetworkSettings;

/// Loaded dataset together with the graph queries run against.
#[derive(Debug, Clone)]
pub struct WorkingNetwork {
    pub summary: LoadSummary,
    pub full: Graph,
    pub graph: Graph,
}

/// Load the dataset and derive the working graph.
///
/// With a sample size the graph is sampled and restricted to its largest
/// connected component; without one the full graph is used as loaded.
pub fn load_working_network(settings: &NetworkSettings) -> Result<WorkingNetwork> {
    let dataset = read_dataset(&settings.dataset).with_context(|| {
        format!(
            "failed to load dataset from {}",
            settings.dataset.display()
        )
    })?;
    let (full, summary) = load_network_with_summary(&dataset, &settings.loader_options());

    let graph = match (settings.sample_size, settings.seed) {
        (None, _) => full.clone(),
        (Some(n), Some(seed)) => working_graph(&full, n, &mut StdRng::seed_from_u64(seed)),
        (Some(n), None) => working_graph(&full, n, &mut rand::rng()),
    };

    info!(
        "road graph ready: {} nodes, {} edges (full graph: {} nodes, {} edges)",
        graph.node_count(),
        graph.edge_count(),
        full.node_count(),
        full.edge_count()
    );

    Ok(WorkingNetwork {
        summary,
        full,
        graph,
    })
}
