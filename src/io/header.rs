//! # Headers
//!
//! A header(-line) for a graph file is defined by a series of tokens separated by whitespace,
//! declaring the size of the graph and optionally the problem the graph was created for.
//!
//! The default layout is
//!     "p {name} {n} {m}"
//! where n is the number of nodes and m the number of edges in the graph.

use itertools::Itertools;

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

impl HeaderToken {
    /// When writing a header, this is the representation for HeaderToken::Any
    fn any_string() -> String {
        "0".to_string()
    }
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format:
/// ```
/// use adjgraph::io::*;
///
/// let format = HeaderFormat::new()
///     .str("p").any().number_of_nodes().number_of_edges().end();
/// assert_eq!(format.parse_header("p dag 3 2"), Ok((3, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of edges was set
    const EDGES_SET: bool = false,
    // Set to *true* if `NODES_SET = true & EDGES_SET = true` and
    // the last entry matches `HeaderToken::End | HeaderToken::Rest`
    const END: bool = false,
>(Vec<HeaderToken>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for HeaderFormat<true, true, true> {
    /// Number of nodes and edges are the third and fourth token in the header.
    /// We also ignore every other entry to not hard-code problem definitions.
    fn default() -> Self {
        Self(vec![
            HeaderToken::Any,
            HeaderToken::Any,
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::Rest,
        ])
    }
}

/// Error type of [`Header::parse_header`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderError(String);

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid header: {}", self.0)
    }
}

impl std::error::Error for HeaderError {}

impl From<HeaderError> for std::io::Error {
    fn from(value: HeaderError) -> Self {
        io_error!(ErrorKind::InvalidData, value)
    }
}

impl Header {
    /// Creates a new HeaderFormat `p {problem} {n} {m}` which is always valid
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(vec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// Tries to parse the header and extract the number of nodes and edges.
    pub fn parse_header(&self, line: &str) -> std::result::Result<(NumNodes, NumEdges), HeaderError> {
        let mut number_of_nodes = None;
        let mut number_of_edges = None;

        let mut parts = line.split_whitespace();
        for token in &self.0 {
            match token {
                HeaderToken::Rest => break,
                HeaderToken::End => {
                    if let Some(extra) = parts.next() {
                        return Err(HeaderError(format!("unexpected token `{extra}`")));
                    }
                    break;
                }
                _ => {}
            }

            let Some(entry) = parts.next() else {
                return Err(HeaderError("premature end of header".to_string()));
            };

            match token {
                HeaderToken::Str(s) if entry != s => {
                    return Err(HeaderError(format!("expected `{s}`, found `{entry}`")));
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = Some(entry.parse().map_err(|_| {
                        HeaderError(format!("cannot parse number of nodes `{entry}`"))
                    })?);
                }
                HeaderToken::NumEdges => {
                    number_of_edges = Some(entry.parse().map_err(|_| {
                        HeaderError(format!("cannot parse number of edges `{entry}`"))
                    })?);
                }
                _ => {}
            }
        }

        match (number_of_nodes, number_of_edges) {
            (Some(n), Some(m)) => Ok((n, m)),
            _ => Err(HeaderError("missing number of nodes or edges".to_string())),
        }
    }

    /// Writes the header for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header_str = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some(HeaderToken::any_string()),
                HeaderToken::Str(s) => Some(s.to_string()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header_str}")
    }
}

impl<const NODES_SET: bool, const EDGES_SET: bool> HeaderFormat<NODES_SET, EDGES_SET, false> {
    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(Vec::new())
    }
}

impl<const EDGES_SET: bool> HeaderFormat<false, EDGES_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, EDGES_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumEdges);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header() {
        let header = Header::default();
        assert_eq!(header.parse_header("p graph 5 7"), Ok((5, 7)));
        assert_eq!(header.parse_header("p  x 5 7 trailing tokens"), Ok((5, 7)));
        assert!(header.parse_header("p graph 5").is_err());
        assert!(header.parse_header("p graph five 7").is_err());
    }

    #[test]
    fn problem_header() {
        let header = Header::new_problem("dag");
        assert_eq!(header.parse_header("p dag 3 0"), Ok((3, 0)));
        assert!(header.parse_header("p ds 3 0").is_err());
        assert!(header.parse_header("p dag 3 0 1").is_err());

        let mut buffer = Vec::new();
        header.write_header(&mut buffer, 3, 2).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "p dag 3 2\n");
    }

    #[test]
    fn custom_order() {
        let header = HeaderFormat::new()
            .number_of_edges()
            .number_of_nodes()
            .ignore_rest();
        assert_eq!(header.parse_header("4 2"), Ok((2, 4)));

        let mut buffer = Vec::new();
        header.write_header(&mut buffer, 2, 4).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "4 2\n");
    }
}
