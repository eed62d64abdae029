/*!
# Relabelling Clones

Produces a copy of a graph whose node ids follow DFS discovery order: the start node becomes `0`,
the next discovered node `1`, and so on. Edges are carried over with both endpoints relabelled and
multiplicities (parallel edges, self-loops) preserved.

By default, once the search from the start node is exhausted it restarts at the smallest yet
undiscovered node until every node has been relabelled. With [`GraphCloner::reachable_only`] the
clone only relabels the nodes reachable from the start; all other nodes map to [`INVALID_NODE`]
and occupy the remaining ids of the clone as isolated nodes.

For directed graphs the neighbor lists of the clone are the relabelled lists of the original in
the same order. For undirected graphs every edge is re-inserted once from the endpoint discovered
first, so the clone is isomorphic but the order within lists may differ.
*/

use tracing::debug;

use super::*;

/// A graph together with the map from original node ids to its node ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relabelled<G> {
    /// The relabelled graph
    pub graph: G,
    /// `mapping[u]` is the id of original node `u` in `graph`, or [`INVALID_NODE`]
    pub mapping: Vec<Node>,
}

impl<G> Relabelled<G> {
    /// Returns the new id of the original node `u`, if it was relabelled
    pub fn new_id_of(&self, u: Node) -> Option<Node> {
        self.mapping
            .get(u as usize)
            .copied()
            .filter(|&v| v != INVALID_NODE)
    }

    /// Returns the original node that received the new id `v`
    pub fn old_id_of(&self, v: Node) -> Option<Node> {
        self.mapping.iter().position(|&x| x == v).map(|u| u as Node)
    }

    /// Number of relabelled nodes
    pub fn number_of_mapped(&self) -> NumNodes {
        self.mapping.iter().filter(|&&v| v != INVALID_NODE).count() as NumNodes
    }

    /// Discards the mapping
    pub fn into_graph(self) -> G {
        self.graph
    }
}

/// Configurable DFS-ordered cloning
#[derive(Debug, Clone, Copy)]
pub struct GraphCloner<'a, G> {
    graph: &'a G,
    start: Node,
    reachable_only: bool,
}

impl<'a, G> GraphCloner<'a, G>
where
    G: AdjacencyList + GraphType + GraphEdgeEditing,
{
    /// Clones the whole graph starting the search at node `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            start: 0,
            reachable_only: false,
        }
    }

    /// Starts the search at `start`
    pub fn start_at(mut self, start: Node) -> Self {
        self.start = start;
        self
    }

    /// If set, only nodes reachable from the start node are relabelled
    pub fn reachable_only(mut self, reachable_only: bool) -> Self {
        self.reachable_only = reachable_only;
        self
    }

    /// Computes the clone.
    /// Fails with [`GraphError::OutOfRange`] if the start node is not a node.
    pub fn compute(&self) -> Result<Relabelled<G>> {
        let graph = self.graph;

        let mut mapping = vec![INVALID_NODE; graph.len()];
        let mut discovered = Vec::with_capacity(graph.len());

        let mut dfs = graph.dfs(self.start)?;
        loop {
            for u in dfs.by_ref() {
                let u = u?;
                mapping[u as usize] = discovered.len() as Node;
                discovered.push(u);
            }

            if self.reachable_only || !dfs.try_restart_at_unvisited()? {
                break;
            }
        }

        let mut clone = G::try_new(graph.number_of_nodes())?;
        for &u in &discovered {
            let pu = mapping[u as usize];
            let mut loop_entries = 0;

            // oldest entries first, so prepending reproduces the original order
            for i in (0..graph.degree_of(u)).rev() {
                let v = graph.ith_neighbor(u, i);
                let pv = mapping[v as usize];
                debug_assert_ne!(pv, INVALID_NODE);

                if G::is_directed() {
                    clone.add_edge(pu, pv)?;
                } else if u == v {
                    // an undirected self-loop occupies two entries
                    loop_entries += 1;
                    if loop_entries % 2 == 1 {
                        clone.add_edge(pu, pu)?;
                    }
                } else if pu < pv {
                    clone.add_edge(pu, pv)?;
                }
            }
        }

        debug!(
            start = self.start,
            mapped = discovered.len(),
            "relabelled clone"
        );

        Ok(Relabelled {
            graph: clone,
            mapping,
        })
    }
}

/// Shorthands for [`GraphCloner`]
pub trait DfsClone: AdjacencyList + GraphType + GraphEdgeEditing {
    /// Returns a copy of the graph with nodes relabelled in DFS discovery order starting at `0`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(2, 0), (0, 2), (0, 1)]).unwrap();
    /// let clone = g.dfs_clone().unwrap();
    ///
    /// // DFS from 0 discovers 0, 1, 2, so 1 and 2 keep their ids here
    /// assert_eq!(clone, g);
    /// ```
    fn dfs_clone(&self) -> Result<Self> {
        GraphCloner::new(self).compute().map(Relabelled::into_graph)
    }

    /// Like [`DfsClone::dfs_clone`] but starts at `start` and also returns the mapping
    fn dfs_clone_from(&self, start: Node) -> Result<Relabelled<Self>> {
        GraphCloner::new(self).start_at(start).compute()
    }
}

impl<G> DfsClone for G where G: AdjacencyList + GraphType + GraphEdgeEditing {}
