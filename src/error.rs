/*!
# Errors

All fallible graph operations return [`Result`], whose error type [`GraphError`] has exactly three
kinds. Operations that are total by contract (removing an absent edge, querying a missing edge,
shortest paths in a disconnected graph) never produce one.
*/

use std::io::ErrorKind;

use thiserror::Error;

use crate::node::*;

/// Errors produced by graph construction, editing and algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An argument was outside of its domain, e.g. a graph with zero nodes
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A node id was not in `0..number_of_nodes`
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    OutOfRange { node: Node, number_of_nodes: NumNodes },

    /// A bounded frontier (queue or stack) overflowed.
    /// Traversals push every node at most once, so this signals a bug.
    #[error("frontier capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

/// Shorthand for results carrying a [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(ErrorKind::InvalidData, value)
    }
}

/// Returns `Err(GraphError::OutOfRange)` unless `node < number_of_nodes`
#[inline]
pub(crate) fn check_node(node: Node, number_of_nodes: NumNodes) -> Result<()> {
    if node < number_of_nodes {
        Ok(())
    } else {
        Err(GraphError::OutOfRange {
            node,
            number_of_nodes,
        })
    }
}
