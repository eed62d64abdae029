//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only draw nodes and edges: every stored edge is written once,
//! so parallel edges and self-loops stay visible.
//!
//! The building blocks can also be used directly, e.g. to draw only some of the edges:
//! ```
//! use adjgraph::{prelude::*, io::*};
//!
//! let graph = AdjList::from_edges(3, [(0, 1), (2, 0), (2, 1)]).unwrap();
//! let mut writer = Vec::new();
//!
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer, true).unwrap();
//! dot_writer.write_edges(&mut writer, graph.edges_of(2, false), true).unwrap();
//! dot_writer.finish_graph(&mut writer).unwrap();
//!
//! assert_eq!(String::from_utf8(writer).unwrap(), "digraph {\nu3->u2;u3->u1;\n}\n");
//! ```

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes retain their internal (0-based) id
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of edges to `writer` on a single line.
    /// Must know if the edges are directed.
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I, directed: bool) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_dir = if directed { "->" } else { "--" };

        for Edge(u, v) in edges {
            write!(
                writer,
                "{}{edge_dir}{};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList + GraphType,
{
    /// Draws every edge once, including parallel edges and self-loops
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = G::is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_edges(&mut writer, graph.edge_multiset(), directed)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: AdjacencyList + GraphType,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_multigraph() {
        let graph = AdjListUndir::from_edges(3, [(1, 0), (1, 0), (2, 2)]).unwrap();

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\nu1--u2;u1--u2;u3--u3;\n}\n"
        );
    }

    #[test]
    fn custom_writer() {
        let graph = AdjList::from_edges(2, [(1, 0)]).unwrap();

        let mut buffer = Vec::new();
        DotWriter::new()
            .inc_nodes(false)
            .node_prefix("v")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "digraph {\nv1->v0;\n}\n");
    }

    #[test]
    fn empty_graph_and_file() {
        let graph = AdjListUndir::try_new(2).unwrap();

        let path = std::env::temp_dir().join(format!("adjgraph-dot-{}.dot", std::process::id()));
        graph.try_write_dot_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, "graph {\n\n}\n");
    }
}
