use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_cli::commands::info::handle_info_command;
use roadnet_cli::commands::nodes::handle_nodes_command;
use roadnet_cli::commands::route::{handle_route_command, RouteCommandArgs};
use roadnet_cli::config::{resolve_dataset_path, NetworkSettings};
use roadnet_cli::output::OutputFormat;
use roadnet_lib::{NodeId, RouteAlgorithm, DEFAULT_ROAD_TAG, DEFAULT_SAMPLE_SIZE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network pathfinding utilities")]
struct Cli {
    /// Path to the JSON export (defaults to $ROADNET_DATASET, then ./export.json).
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Maximum number of nodes kept when sampling the road graph.
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Use the full graph as loaded, without sampling or component filtering.
    #[arg(long, global = true)]
    full: bool,

    /// Seed for reproducible sampling.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Tag key marking a way as a road.
    #[arg(long, global = true, default_value = DEFAULT_ROAD_TAG)]
    road_tag: String,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the size of the loaded and working road graphs.
    Info,
    /// List the node identifiers available as origin or destination.
    Nodes,
    /// Compute a route between two node identifiers.
    Route {
        /// Origin node identifier.
        #[arg(long = "from", allow_negative_numbers = true)]
        from: NodeId,
        /// Destination node identifier.
        #[arg(long = "to", allow_negative_numbers = true)]
        to: NodeId,
        /// Search algorithm: `bfs` (fewest hops) or `a-star` (shortest distance).
        #[arg(long, default_value_t = RouteAlgorithm::AStar)]
        algorithm: RouteAlgorithm,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = NetworkSettings {
        dataset: resolve_dataset_path(cli.dataset.as_deref()),
        sample_size: (!cli.full).then_some(cli.sample_size),
        seed: cli.seed,
        road_tag: cli.road_tag.clone(),
    };

    match cli.command {
        Command::Info => handle_info_command(&settings, cli.format),
        Command::Nodes => handle_nodes_command(&settings, cli.format),
        Command::Route {
            from,
            to,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
            };
            handle_route_command(&settings, cli.format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
