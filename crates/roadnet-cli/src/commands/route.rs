//! Route command handler for computing paths between two nodes.

use anyhow::{anyhow, bail, Result};

use roadnet_lib::{plan_route, Error as RouteError, NodeId, RouteAlgorithm, RouteRequest};

use crate::commands::load_working_network;
use crate::config::NetworkSettings;
use crate::output::{render_route, OutputFormat, RouteSummary};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteCommandArgs {
    /// Origin node identifier.
    pub from: NodeId,
    /// Destination node identifier.
    pub to: NodeId,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    ///
    /// Identical endpoints are rejected here rather than in the library.
    pub fn to_request(&self) -> Result<RouteRequest> {
        if self.from == self.to {
            bail!("origin and destination must be different nodes");
        }
        Ok(RouteRequest {
            origin: self.from,
            destination: self.to,
            algorithm: self.algorithm,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    settings: &NetworkSettings,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request()?;
    let network = load_working_network(settings)?;

    let route = plan_route(&network.graph, &request).map_err(describe_route_error)?;
    let summary = RouteSummary::from_route(&route, &network.graph);
    println!("{}", render_route(&summary, format, ColorPalette::detect())?);
    Ok(())
}

fn describe_route_error(error: RouteError) -> anyhow::Error {
    match error {
        RouteError::InvalidNodeReference { id } => anyhow!(
            "Unknown node {id}: it is not part of the working graph (run `roadnet-cli nodes` to list candidates)"
        ),
        RouteError::NoPathFound {
            origin,
            destination,
        } => anyhow!("No route found between {origin} and {destination}"),
        other => anyhow::Error::new(other),
    }
}
