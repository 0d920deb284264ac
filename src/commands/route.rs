//! One-shot route lookup

use crate::cli::{Cli, OutputFormat};
use wayfarer_core::error::{Result, WayfarerError};
use wayfarer_core::roadmap::Point;

/// Execute the route command
pub fn execute(cli: &Cli, from: &str, to: &str) -> Result<()> {
    let (map, config) = super::load_map(cli)?;

    let from = parse_coordinate(from, config.coordinate_scale)?;
    let to = parse_coordinate(to, config.coordinate_scale)?;

    let waypoints = map.route(from, to);

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "found": !waypoints.is_empty(),
                "waypoints": waypoints,
            });
            println!("{}", serde_json::to_string(&payload)?);
        }
        OutputFormat::Human => {
            if waypoints.is_empty() {
                println!("destination unreachable");
            } else {
                for point in &waypoints {
                    println!("{} {}", point.lat, point.lon);
                }
            }
        }
    }

    Ok(())
}

/// Parse a LAT,LON argument in raw degrees into scaled map units
fn parse_coordinate(raw: &str, coordinate_scale: f64) -> Result<Point> {
    let invalid = || WayfarerError::InvalidCoordinate {
        value: raw.to_string(),
    };

    let (lat, lon) = raw.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    Ok(Point {
        lat: lat * coordinate_scale,
        lon: lon * coordinate_scale,
    })
}
