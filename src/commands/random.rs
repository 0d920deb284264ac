//! Random graph generation
//!
//! Prints the generated edges in the road map `E` record shape, one per
//! line, so the output is easy to eyeball and diff.

use crate::cli::{Cli, OutputFormat};
use wayfarer_core::error::Result;
use wayfarer_core::graph::random_graph;

/// Execute the random command
pub fn execute(cli: &Cli, n: usize, m: usize) -> Result<()> {
    let graph = random_graph(n, m)?;

    match cli.format {
        OutputFormat::Json => {
            let edges: Vec<(u32, u32)> = graph.edges().map(|(v, w)| (*v, *w)).collect();
            let payload = serde_json::json!({
                "vertices": graph.vertex_count(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string(&payload)?);
        }
        OutputFormat::Human => {
            for (v, w) in graph.edges() {
                println!("E,{},{},\"\"", v, w);
            }
        }
    }

    Ok(())
}
