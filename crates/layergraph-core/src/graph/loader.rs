//! JSON edge-list input.
//!
//! ```json
//! { "vertex_count": 3, "edges": [ { "src": 1, "dest": 2, "weight": 4 } ] }
//! ```

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::{Edge, Weight};

/// Serialized form of a graph: a vertex count and a flat edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList<T> {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in insertion order.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T: Weight> EdgeList<T> {
    /// Snapshots a graph's edges.
    #[must_use]
    pub fn from_graph(graph: &Graph<T>) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().to_vec(),
        }
    }

    /// Builds a graph, dropping out-of-range edges with a warning.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexCount` if `vertex_count` is zero.
    pub fn into_graph(self) -> Result<Graph<T>> {
        let mut graph = Graph::try_new(self.vertex_count)?;
        let total = self.edges.len();
        let accepted = self
            .edges
            .into_iter()
            .filter(|&edge| graph.insert(edge).is_ok())
            .count();
        if accepted < total {
            tracing::warn!(dropped = total - accepted, "edge list contained invalid edges");
        }
        Ok(graph)
    }
}

/// Parses a graph from a JSON string.
pub fn from_json_str<T: Weight + DeserializeOwned>(json: &str) -> Result<Graph<T>> {
    let list: EdgeList<T> = serde_json::from_str(json)?;
    list.into_graph()
}

/// Parses a graph from any JSON reader.
pub fn from_json_reader<T: Weight + DeserializeOwned, R: Read>(reader: R) -> Result<Graph<T>> {
    let list: EdgeList<T> = serde_json::from_reader(reader)?;
    list.into_graph()
}

/// Loads a graph from a JSON file.
pub fn load_json_file<T: Weight + DeserializeOwned>(path: impl AsRef<Path>) -> Result<Graph<T>> {
    let file = std::fs::File::open(path.as_ref()).map_err(Error::Io)?;
    from_json_reader(std::io::BufReader::new(file))
}

/// Serializes a graph to pretty JSON.
pub fn to_json_string<T: Weight + Serialize>(graph: &Graph<T>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&EdgeList::from_graph(graph))?)
}
