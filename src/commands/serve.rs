//! Serve the route protocol over stdin/stdout

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::Cli;
use wayfarer_core::error::Result;
use wayfarer_core::protocol;

/// Execute the serve command
pub fn execute(cli: &Cli) -> Result<()> {
    let (map, config) = super::load_map(cli)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed)) {
        tracing::warn!(error = %e, "failed to install signal handler");
    }

    tracing::info!(
        vertices = map.graph.vertex_count(),
        edges = map.graph.edge_count(),
        "serving route requests"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    protocol::serve(
        &map,
        stdin.lock(),
        stdout.lock(),
        config.coordinate_scale,
        &shutdown,
    )
}
