//! Route request/response line protocol
//!
//! Client devices talk to the server over a serial link, but the transport
//! is just a byte stream, so the same loop runs against a serial port,
//! stdin/stdout, or an in-memory cursor in tests.
//!
//! Request: one line of four whitespace-separated numbers,
//! `LAT1 LON1 LAT2 LON2`, in raw degrees.
//! Response: the waypoint count on its own line, then one `LAT LON` line
//! per waypoint in scaled map units. A malformed request answers `0` so
//! the framing stays parseable and the loop keeps serving.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::roadmap::{Point, RoadMap};

/// Parse a request line into origin and destination, scaling raw degrees
/// into map units
fn parse_request(line: &str, coordinate_scale: f64) -> Option<(Point, Point)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [lat1, lon1, lat2, lon2] = fields.as_slice() else {
        return None;
    };

    let mut values = [0.0_f64; 4];
    for (slot, raw) in values.iter_mut().zip([lat1, lon1, lat2, lon2]) {
        *slot = raw.parse().ok()?;
    }

    Some((
        Point {
            lat: values[0] * coordinate_scale,
            lon: values[1] * coordinate_scale,
        },
        Point {
            lat: values[2] * coordinate_scale,
            lon: values[3] * coordinate_scale,
        },
    ))
}

/// Serve route requests from `input`, one per line, until EOF or until
/// `shutdown` flips
pub fn serve<R, W>(
    map: &RoadMap,
    input: R,
    mut output: W,
    coordinate_scale: f64,
    shutdown: &AtomicBool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        if shutdown.load(Ordering::Relaxed) {
            tracing::info!("shutdown requested");
            break;
        }

        let line = line?;
        tracing::debug!(request = %line, "received");

        let waypoints = match parse_request(&line, coordinate_scale) {
            Some((from, to)) => map.route(from, to),
            None => {
                tracing::warn!(request = %line, "malformed request");
                Vec::new()
            }
        };

        writeln!(output, "{}", waypoints.len())?;
        for point in &waypoints {
            writeln!(output, "{} {}", point.lat, point.lon)?;
        }
        output.flush()?;
    }

    Ok(())
}
