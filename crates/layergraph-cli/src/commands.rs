//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use layergraph_core::graph::{loader, reference::reference_graph, render};
use layergraph_core::{layered_bfs_with, Graph, TraversalSettings};

use crate::OutputFormat;

/// Loads the graph from `input`, or builds the reference graph.
fn load_graph(input: Option<&Path>) -> Result<Graph<u32>> {
    match input {
        Some(path) => loader::load_json_file(path)
            .with_context(|| format!("Failed to load graph from {}", path.display())),
        None => {
            tracing::debug!("no input given, using reference graph");
            Ok(reference_graph())
        }
    }
}

pub(crate) fn show(out: &mut impl Write, input: Option<&Path>) -> Result<()> {
    let graph = load_graph(input)?;
    writeln!(
        out,
        "{} ({} vertices, {} edges)",
        "Graph".bold(),
        graph.vertex_count(),
        graph.edge_count()
    )?;
    write!(out, "{}", render::render_adjacency(&graph))?;
    Ok(())
}

pub(crate) fn bfs(
    out: &mut impl Write,
    input: Option<&Path>,
    settings: &TraversalSettings,
    format: OutputFormat,
) -> Result<()> {
    let graph = load_graph(input)?;
    if !graph.contains_vertex(settings.start) {
        tracing::warn!(
            start = settings.start,
            vertex_count = graph.vertex_count(),
            "start vertex is not in the graph"
        );
    }

    let steps = layered_bfs_with(&graph, settings.start, &settings.to_traversal_config());

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &steps)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", "BFS Order of vertices:".bold())?;
            write!(out, "{}", render::render_traversal(&steps))?;
        }
    }
    Ok(())
}
