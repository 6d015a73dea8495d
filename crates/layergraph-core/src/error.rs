//! Error types for layergraph-core.

use thiserror::Error;

use crate::graph::VertexId;

/// Graph error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Edge endpoint outside `[1, vertex_count]`.
    #[error("Vertex out of bounds: edge {src} -> {dest} in graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        /// Source vertex of the rejected edge.
        src: VertexId,
        /// Destination vertex of the rejected edge.
        dest: VertexId,
        /// Vertex count of the graph that rejected it.
        vertex_count: usize,
    },

    /// A graph must have at least one vertex.
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::VertexOutOfBounds {
            src: 9,
            dest: 1,
            vertex_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "Vertex out of bounds: edge 9 -> 1 in graph with 8 vertices"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
