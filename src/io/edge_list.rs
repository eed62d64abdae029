//! # EdgeList
//!
//! The EdgeList-Format consists of a header, followed by `m` non-comment-lines
//! `u v` representing an edge `Edge(u - 1, v - 1)`. Empty lines are skipped.
//!
//! Edges are inserted in file order, so for directed graphs the adjacency lists of a graph read
//! from a file written by [`EdgeListWriter`] match the original.

use std::io::Lines;

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader =
            EdgeListEdgesReader::try_new(reader, &self.header, &self.comment_identifier)?;

        let mut graph = G::try_new(edges_reader.number_of_nodes())?;
        let mut number_of_edges: NumEdges = 0;
        for edge in edges_reader.by_ref() {
            let Edge(u, v) = edge?;
            graph.add_edge(u, v)?;
            number_of_edges += 1;
        }

        raise_error_unless!(
            number_of_edges == edges_reader.number_of_edges(),
            ErrorKind::InvalidData,
            format!(
                "Header announced {} edges but {number_of_edges} were found",
                edges_reader.number_of_edges()
            )
        );

        debug!(
            n = edges_reader.number_of_nodes(),
            m = number_of_edges,
            "read edge list"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the (0-based) edges of an edge list
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, header_format: &Header, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "Header not found"))?;

        (
            edge_list_reader.number_of_nodes,
            edge_list_reader.number_of_edges,
        ) = header_format.parse_header(&header)?;

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Unexpected trailing tokens in edge line `{line}`")
        );

        for u in [from, dest] {
            raise_error_unless!(
                (1..=self.number_of_nodes).contains(&u),
                ErrorKind::InvalidData,
                format!(
                    "Node {u} is not within 1..={}",
                    self.number_of_nodes
                )
            );
        }

        Ok(Some(Edge(from - 1, dest - 1)))
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for EdgeListWriter {
    /// Writes `p graph {n} {m}` which the default reader accepts
    fn default() -> Self {
        Self {
            header: Header::new_problem("graph"),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListWriter {
        self.header = format;
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> GraphWriter<G> for EdgeListWriter {
    /// Writes every edge once. Directed edges are written per node, oldest first; undirected
    /// edges are written normalized and sorted.
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header.write_header(
            &mut writer,
            graph.number_of_nodes(),
            graph.number_of_edges(),
        )?;

        if G::is_directed() {
            for u in graph.vertices() {
                for i in (0..graph.degree_of(u)).rev() {
                    writeln!(writer, "{} {}", u + 1, graph.ith_neighbor(u, i) + 1)?;
                }
            }
        } else {
            for Edge(u, v) in graph.edge_multiset() {
                writeln!(writer, "{} {}", u + 1, v + 1)?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
