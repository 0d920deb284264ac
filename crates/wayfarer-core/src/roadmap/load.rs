//! Road map record loader
//!
//! Line-oriented text records, one per line:
//! - `V,<id>,<lat>,<lon>` declares a vertex with raw degree coordinates
//! - `E,<from>,<to>,"<name>"` declares a directed street segment
//!
//! Vertex records must precede the edge records that reference them; an
//! edge naming an undeclared endpoint is a data error, not an implicit
//! vertex insertion.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, WayfarerError};
use crate::roadmap::{Point, RoadMap};

fn parse_field<T: FromStr>(raw: &str, line: usize, content: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| WayfarerError::InvalidRecord {
        line,
        content: content.to_string(),
    })
}

/// Read road map records from a buffered reader, scaling raw degree
/// coordinates by `coordinate_scale`.
pub fn load_roadmap<R: BufRead>(reader: R, coordinate_scale: f64) -> Result<RoadMap> {
    let mut map = RoadMap::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let record = line.trim_end();
        if record.is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.split(',').collect();
        match fields.as_slice() {
            ["V", id, lat, lon] => {
                let id = parse_field(id, line_no, record)?;
                let lat: f64 = parse_field(lat, line_no, record)?;
                let lon: f64 = parse_field(lon, line_no, record)?;

                map.graph.add_vertex(id);
                map.coords.insert(
                    id,
                    Point {
                        lat: lat * coordinate_scale,
                        lon: lon * coordinate_scale,
                    },
                );
            }
            ["E", from, to, name] => {
                let from = parse_field(from, line_no, record)?;
                let to = parse_field(to, line_no, record)?;

                if !map.coords.contains_key(&from) || !map.coords.contains_key(&to) {
                    return Err(WayfarerError::UnknownEndpoint {
                        line: line_no,
                        from,
                        to,
                    });
                }

                map.graph.add_edge(from, to);
                map.street_names
                    .insert((from, to), name.trim_matches('"').to_string());
            }
            _ => {
                return Err(WayfarerError::InvalidRecord {
                    line: line_no,
                    content: record.to_string(),
                });
            }
        }
    }

    Ok(map)
}

/// Load a road map from a record file on disk
pub fn load_roadmap_file(path: &Path, coordinate_scale: f64) -> Result<RoadMap> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(WayfarerError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    load_roadmap(BufReader::new(file), coordinate_scale)
}
