//! In-memory road network
//!
//! The graph itself carries no payloads; vertex coordinates and street
//! names live in side tables keyed by vertex id and edge pair. Built once
//! by the loader, then read-only while routes are answered.

mod load;

pub use load::{load_roadmap, load_roadmap_file};

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{least_cost_path, Digraph};

/// Vertex identifier used by road map record files
pub type VertexId = i64;

/// A coordinate pair in scaled map units. Raw degrees are multiplied by the
/// coordinate scale at load time, matching the representation client
/// devices exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Straight-line distance to another point. Road vertices sit close
    /// enough together that flat geometry is an acceptable approximation.
    pub fn distance(&self, other: &Point) -> f64 {
        ((other.lat - self.lat).powi(2) + (other.lon - self.lon).powi(2)).sqrt()
    }
}

/// A road network: directed street graph plus coordinate and name tables
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    pub graph: Digraph<VertexId>,
    coords: HashMap<VertexId, Point>,
    street_names: HashMap<(VertexId, VertexId), String>,
}

impl RoadMap {
    /// Coordinates of a vertex, if it was declared in the record file
    pub fn coord(&self, v: VertexId) -> Option<Point> {
        self.coords.get(&v).copied()
    }

    /// Street name attached to a directed edge
    pub fn street_name(&self, from: VertexId, to: VertexId) -> Option<&str> {
        self.street_names.get(&(from, to)).map(String::as_str)
    }

    /// Length of the street segment between two vertices. Every edge loaded
    /// from a record file has coordinates for both endpoints; a pair
    /// without them costs infinity and is never preferred.
    pub fn edge_cost(&self, from: &VertexId, to: &VertexId) -> f64 {
        match (self.coords.get(from), self.coords.get(to)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => f64::INFINITY,
        }
    }

    /// The vertex geometrically closest to `target`, by linear scan.
    /// `None` only for an empty map.
    pub fn nearest_vertex(&self, target: Point) -> Option<VertexId> {
        let mut best: Option<(VertexId, f64)> = None;
        for (&id, coord) in &self.coords {
            let crow_flies = coord.distance(&target);
            if best.is_none_or(|(_, best_distance)| crow_flies < best_distance) {
                best = Some((id, crow_flies));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Snap both endpoints to their nearest vertices and find the least
    /// cost route between them. An unreachable destination yields an empty
    /// waypoint list, which callers report as "destination unreachable".
    #[tracing::instrument(skip(self))]
    pub fn route(&self, from: Point, to: Point) -> Vec<Point> {
        let Some(start) = self.nearest_vertex(from) else {
            return Vec::new();
        };
        let Some(end) = self.nearest_vertex(to) else {
            return Vec::new();
        };

        let path = least_cost_path(&self.graph, &start, &end, |v, w| self.edge_cost(v, w))
            .unwrap_or_default();
        tracing::debug!(start, end, waypoints = path.len(), "route");

        path.iter().filter_map(|v| self.coord(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_map() -> RoadMap {
        let records = "\
V,1,0.0,0.0
V,2,0.0,1.0
V,3,1.0,1.0
V,4,1.0,0.0
V,5,5.0,5.0
E,1,2,\"First Ave\"
E,2,3,\"Second St\"
E,3,4,\"Third Blvd\"
E,1,4,\"Shortcut\"
";
        load_roadmap(Cursor::new(records), 100_000.0).unwrap()
    }

    #[test]
    fn test_point_distance() {
        let a = Point { lat: 0.0, lon: 0.0 };
        let b = Point { lat: 3.0, lon: 4.0 };
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_edge_cost_is_euclidean() {
        let map = sample_map();
        assert_eq!(map.edge_cost(&1, &2), 100_000.0);
        assert_eq!(map.edge_cost(&1, &3), 100_000.0 * 2.0_f64.sqrt());
    }

    #[test]
    fn test_edge_cost_unknown_vertex_is_infinite() {
        let map = sample_map();
        assert_eq!(map.edge_cost(&1, &99), f64::INFINITY);
    }

    #[test]
    fn test_street_names() {
        let map = sample_map();
        assert_eq!(map.street_name(1, 2), Some("First Ave"));
        assert_eq!(map.street_name(2, 1), None);
    }

    #[test]
    fn test_nearest_vertex() {
        let map = sample_map();
        assert_eq!(
            map.nearest_vertex(Point {
                lat: 10_000.0,
                lon: -5_000.0
            }),
            Some(1)
        );
        assert_eq!(
            map.nearest_vertex(Point {
                lat: 90_000.0,
                lon: 110_000.0
            }),
            Some(3)
        );
    }

    #[test]
    fn test_nearest_vertex_empty_map() {
        let map = RoadMap::default();
        assert_eq!(map.nearest_vertex(Point { lat: 0.0, lon: 0.0 }), None);
    }

    #[test]
    fn test_route_snaps_and_follows_streets() {
        let map = sample_map();
        let waypoints = map.route(
            Point { lat: 0.0, lon: 0.0 },
            Point {
                lat: 100_000.0,
                lon: 100_000.0,
            },
        );
        // 1 -> 2 -> 3 is the only street route to vertex 3
        assert_eq!(
            waypoints,
            vec![
                Point { lat: 0.0, lon: 0.0 },
                Point {
                    lat: 0.0,
                    lon: 100_000.0
                },
                Point {
                    lat: 100_000.0,
                    lon: 100_000.0
                },
            ]
        );
    }

    #[test]
    fn test_route_unreachable_is_empty() {
        let map = sample_map();
        // vertex 5 has no incident edges
        let waypoints = map.route(
            Point { lat: 0.0, lon: 0.0 },
            Point {
                lat: 500_000.0,
                lon: 500_000.0,
            },
        );
        assert!(waypoints.is_empty());
    }

    #[test]
    fn test_route_same_snap_point() {
        let map = sample_map();
        let waypoints = map.route(
            Point {
                lat: 1_000.0,
                lon: 0.0,
            },
            Point {
                lat: 0.0,
                lon: 1_000.0,
            },
        );
        assert_eq!(waypoints, vec![Point { lat: 0.0, lon: 0.0 }]);
    }
}
