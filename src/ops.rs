/*!
# Graph Operations

Traits describing what can be asked of and done to a graph. Algorithms in [`crate::algo`] are
written against these traits only and never touch a representation directly.

Neighborhoods are **ordered**: iterating the neighbors of a node yields the most recently
inserted neighbor first. Traversal orders depend on this, so every representation must keep it.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Marker trait for the orientation of a graph
pub trait GraphDir: Copy + Clone + Default + 'static {
    /// *true* iff edges are one-way
    const DIRECTED: bool;
}

/// Edges `(u, v)` are one-way; inserting them only touches the neighborhood of `u`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Directed;

/// Edges `{u, v}` are stored in the neighborhoods of both `u` and `v`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Provides the orientation of a graph at the type level
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Graphs always have at least one node
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over V. The range does not borrow self and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a valid node id
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(GraphError::OutOfRange)` unless `u` is a valid node id
    fn check_node(&self, u: Node) -> Result<()> {
        check_node(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges are counted individually, an undirected edge counts once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex, most recently inserted first.
    /// Parallel edges show up once per insertion.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbor entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the ith neighbor (0-indexed, iteration order) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    ///
    /// Note that an undirected self-loop is stored twice in its neighborhood and is therefore
    /// also reported twice; use [`EdgeMultiset::edge_multiset`] to list every edge exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Lists every inserted edge exactly once, respecting parallel edges and self-loops
pub trait EdgeMultiset: AdjacencyList + GraphType {
    /// Returns all edges in sorted order, one entry per `add_edge` call that is still present.
    /// Undirected edges are normalized.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::prelude::*;
    ///
    /// let g = AdjListUndir::from_edges(3, [(1, 0), (1, 0), (2, 2)]).unwrap();
    /// assert_eq!(g.edge_multiset(), vec![Edge(0, 1), Edge(0, 1), Edge(2, 2)]);
    /// ```
    fn edge_multiset(&self) -> Vec<Edge> {
        let mut edges = self.edges(Self::is_undirected()).collect_vec();
        edges.sort_unstable();

        if Self::is_undirected() {
            // every undirected self-loop occurs twice in its neighborhood
            let mut keep = true;
            let mut last_loop = None;
            edges.retain(|e| {
                if !e.is_loop() {
                    return true;
                }
                if last_loop != Some(*e) {
                    last_loop = Some(*e);
                    keep = true;
                }
                let res = keep;
                keep = !keep;
                res
            });
        }

        edges
    }
}

impl<G: AdjacencyList + GraphType> EdgeMultiset for G {}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `v` is in the neighborhood of `u`.
    ///
    /// This only inspects the neighborhood of `u`. Graphs built solely through
    /// [`GraphEdgeEditing`] keep undirected neighborhoods symmetric, so the result agrees with
    /// `has_edge(v, u)` for them. Out-of-range nodes yield *false*.
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Degree queries with range checks
pub trait Degrees: AdjacencyList {
    /// Returns the number of entries in the neighborhood of `u`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::prelude::*;
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    /// assert_eq!(g.out_degree_of(0), Ok(2));
    /// assert!(g.out_degree_of(3).is_err());
    /// ```
    fn out_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self.degree_of(u))
    }

    /// Counts the occurrences of `u` over all neighborhoods. Runs in `O(n + m)`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::prelude::*;
    ///
    /// let g = AdjList::from_edges(3, [(0, 2), (1, 2), (1, 2)]).unwrap();
    /// assert_eq!(g.in_degree_of(2), Ok(3));
    /// assert_eq!(g.in_degree_of(0), Ok(0));
    /// ```
    fn in_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self
            .vertices()
            .map(|v| self.neighbors_of(v).filter(|&w| w == u).count() as NumNodes)
            .sum())
    }
}

impl<G: AdjacencyList> Degrees for G {}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` singleton nodes.
    /// Fails with [`GraphError::InvalidArgument`] if `n == 0`.
    fn try_new(n: NumNodes) -> Result<Self>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `(u, v)` to the graph. It becomes the first neighbor of `u`
    /// (and of `v` in undirected graphs). Parallel edges and self-loops are kept.
    /// Fails with [`GraphError::OutOfRange`] and leaves the graph untouched if `u` or `v` is
    /// not a node.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds all edges in the collection in order, stopping at the first error
    fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the first occurrence of `v` in the neighborhood of `u` (and for undirected
    /// graphs the first occurrence of `u` in the neighborhood of `v`).
    /// Absent edges and out-of-range nodes are a no-op.
    /// Returns *true* if any entry was removed.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and edges, inserted in the given order
    fn from_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge>,
    {
        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
