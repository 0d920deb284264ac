//! Road map statistics

use crate::cli::{Cli, OutputFormat};
use wayfarer_core::error::Result;

/// Execute the info command
pub fn execute(cli: &Cli) -> Result<()> {
    let (map, _config) = super::load_map(cli)?;

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "vertices": map.graph.vertex_count(),
                "edges": map.graph.edge_count(),
            });
            println!("{}", serde_json::to_string(&payload)?);
        }
        OutputFormat::Human => {
            println!("vertices: {}", map.graph.vertex_count());
            println!("edges: {}", map.graph.edge_count());
        }
    }

    Ok(())
}
