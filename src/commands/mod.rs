//! Command implementations and dispatch

mod info;
mod random;
mod route;
mod serve;

use std::time::Instant;

use crate::cli::{Cli, Commands};
use wayfarer_core::config::ServerConfig;
use wayfarer_core::error::Result;
use wayfarer_core::roadmap::{load_roadmap_file, RoadMap};

/// Dispatch the parsed command line to its implementation
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Route { from, to } => route::execute(cli, from, to),
        Commands::Serve => serve::execute(cli),
        Commands::Info => info::execute(cli),
        Commands::Random { n, m } => random::execute(cli, *n, *m),
    }
}

/// Resolve the config, then load the road map. The --graph flag takes
/// precedence over the config file's path.
fn load_map(cli: &Cli) -> Result<(RoadMap, ServerConfig)> {
    let config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let path = cli.graph.as_ref().unwrap_or(&config.graph);

    let start = Instant::now();
    let map = load_roadmap_file(path, config.coordinate_scale)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = map.graph.vertex_count(),
        edges = map.graph.edge_count(),
        "load_roadmap"
    );

    Ok((map, config))
}
