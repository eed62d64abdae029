//! # Listing
//!
//! Plain-text reports meant for humans rather than for parsing:
//!
//! - the adjacency listing of a graph, one block per node with its neighbors in iteration order
//!   ```text
//!   Adjacency list of vertex 0:
//!   4 -> 1 -> NULL
//!   ```
//! - single report lines for traversal orders, topological orders, distances and degrees.
//!
//! Nodes are printed with their internal 0-based ids.

use itertools::Itertools;

use crate::algo::ShortestPaths;

use super::*;

/// A writer for the adjacency listing
#[derive(Debug, Clone, Default)]
pub struct ListingWriter {
    /// Skip nodes without neighbors
    skip_isolated: bool,
}

impl ListingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes without neighbors are not listed
    pub fn skip_isolated(mut self, skip_isolated: bool) -> Self {
        self.skip_isolated = skip_isolated;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for ListingWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for u in graph.vertices() {
            if self.skip_isolated && graph.degree_of(u) == 0 {
                continue;
            }

            writeln!(writer, "Adjacency list of vertex {u}:")?;
            for v in graph.neighbors_of(u) {
                write!(writer, "{v} -> ")?;
            }
            writeln!(writer, "NULL")?;
        }
        Ok(())
    }
}

/// Trait for writing the adjacency listing of a graph.
/// Shorthand for default settings.
pub trait ListingWrite {
    /// Tries to write the listing to a writer
    fn try_write_listing<W: Write>(&self, writer: W) -> Result<()>;
}

impl<G: AdjacencyList> ListingWrite for G {
    fn try_write_listing<W: Write>(&self, writer: W) -> Result<()> {
        ListingWriter::default().try_write_graph(self, writer)
    }
}

/// Writes a traversal order as `{name} starting from vertex {start}: {order}`
pub fn write_traversal<W: Write>(
    writer: &mut W,
    name: &str,
    start: Node,
    order: &[Node],
) -> Result<()> {
    writeln!(
        writer,
        "{name} starting from vertex {start}: {}",
        order.iter().join(" ")
    )
}

/// Writes a topological order as `Topological Sort: {order}`
pub fn write_topological_order<W: Write>(writer: &mut W, order: &[Node]) -> Result<()> {
    writeln!(writer, "Topological Sort: {}", order.iter().join(" "))
}

/// Writes one `Vertex {v}: Distance = {d}` line per node after a heading naming the source.
/// Unreachable nodes are reported as `INF`.
pub fn write_distances<W: Write>(writer: &mut W, paths: &ShortestPaths) -> Result<()> {
    writeln!(
        writer,
        "Dijkstra's Shortest Paths starting from vertex {}:",
        paths.source()
    )?;
    for (v, distance) in paths.iter() {
        match distance {
            Some(d) => writeln!(writer, "Vertex {v}: Distance = {d}")?,
            None => writeln!(writer, "Vertex {v}: Distance = INF")?,
        }
    }
    Ok(())
}

/// Writes one `Vertex {v}: In-degree = {i}, Out-degree = {o}` line per node
pub fn write_degrees<W, G>(writer: &mut W, graph: &G) -> Result<()>
where
    W: Write,
    G: AdjacencyList,
{
    for v in graph.vertices() {
        writeln!(
            writer,
            "Vertex {v}: In-degree = {}, Out-degree = {}",
            graph.in_degree_of(v)?,
            graph.out_degree_of(v)?
        )?;
    }
    Ok(())
}
