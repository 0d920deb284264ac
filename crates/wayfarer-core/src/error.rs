//! Error types and exit codes for wayfarer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing map, malformed records, unknown vertices)
//!
//! "No path" is never an error: an unreachable destination is a normal,
//! successful result and is reported as such by the callers.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfarer CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing map, malformed records (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfarer operations
#[derive(Error, Debug)]
pub enum WayfarerError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid coordinate pair: {value} (expected: LAT,LON)")]
    InvalidCoordinate { value: String },

    #[error(
        "for {vertices} vertices, you wanted {requested} edges, \
         but can only have a maximum of {max}"
    )]
    InvalidEdgeCount {
        vertices: usize,
        requested: usize,
        max: usize,
    },

    // Data errors (exit code 3)
    #[error("road map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("malformed record on line {line}: |{content}|")]
    InvalidRecord { line: usize, content: String },

    #[error("edge on line {line} has an endpoint that is not a vertex: ({from}, {to})")]
    UnknownEndpoint { line: usize, from: i64, to: i64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfarerError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfarerError::UsageError(_)
            | WayfarerError::InvalidCoordinate { .. }
            | WayfarerError::InvalidEdgeCount { .. } => ExitCode::Usage,

            WayfarerError::MapNotFound { .. }
            | WayfarerError::VertexNotFound { .. }
            | WayfarerError::InvalidRecord { .. }
            | WayfarerError::UnknownEndpoint { .. } => ExitCode::Data,

            WayfarerError::Io(_)
            | WayfarerError::Toml(_)
            | WayfarerError::Json(_)
            | WayfarerError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfarerError::UsageError(_) => "usage_error",
            WayfarerError::InvalidCoordinate { .. } => "invalid_coordinate",
            WayfarerError::InvalidEdgeCount { .. } => "invalid_edge_count",
            WayfarerError::MapNotFound { .. } => "map_not_found",
            WayfarerError::VertexNotFound { .. } => "vertex_not_found",
            WayfarerError::InvalidRecord { .. } => "invalid_record",
            WayfarerError::UnknownEndpoint { .. } => "unknown_endpoint",
            WayfarerError::Io(_) => "io_error",
            WayfarerError::Toml(_) => "toml_error",
            WayfarerError::Json(_) => "json_error",
            WayfarerError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
