/*!
# Unit-Weight Shortest Paths

Every edge has weight one. Distances are computed with a Dijkstra-style selection loop: in each
round the non-finalized node with the smallest finite distance is finalized and its neighbors are
relaxed. Ties are broken towards the smaller node id.

The loop performs at most `n - 1` rounds and stops early once no finite non-finalized node is
left. Nodes that are never reached keep the distance [`UNREACHABLE`].

Since all weights are one, the resulting distances coincide with BFS layers.
*/

use tracing::debug;

use super::*;

/// Distance of a node that cannot be reached from the source
pub const UNREACHABLE: NumNodes = NumNodes::MAX;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<NumNodes>,
}

impl ShortestPaths {
    /// Returns the source node
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `v`, or `None` if `v` is unreachable.
    /// Nodes outside the graph are unreachable.
    pub fn distance_to(&self, v: Node) -> Option<NumNodes> {
        self.distances
            .get(v as usize)
            .copied()
            .filter(|&d| d != UNREACHABLE)
    }

    /// Returns *true* if `v` can be reached from the source
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_some()
    }

    /// Raw distances indexed by node; unreachable nodes store [`UNREACHABLE`]
    pub fn distances(&self) -> &[NumNodes] {
        &self.distances
    }

    /// Iterates over all nodes together with their distance
    pub fn iter(&self) -> impl Iterator<Item = (Node, Option<NumNodes>)> + '_ {
        (0..self.distances.len() as Node).map(|v| (v, self.distance_to(v)))
    }

    /// Number of nodes reachable from the source (including the source itself)
    pub fn number_of_reachable(&self) -> NumNodes {
        self.distances.iter().filter(|&&d| d != UNREACHABLE).count() as NumNodes
    }
}

/// Returns the non-finalized node of smallest finite distance, preferring smaller ids
fn select_min(distances: &[NumNodes], finalized: &NodeBitSet) -> Option<Node> {
    let mut best: Option<(NumNodes, Node)> = None;
    for (v, &d) in distances.iter().enumerate() {
        let v = v as Node;
        if d == UNREACHABLE || finalized.get_bit(v) {
            continue;
        }
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, v));
        }
    }
    best.map(|(_, v)| v)
}

/// Single-source shortest paths with unit edge weights
pub trait UnitShortestPaths: AdjacencyList {
    /// Computes the distance from `source` to every node.
    /// Fails with [`GraphError::OutOfRange`] if `source` is not a node.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// let paths = g.unit_dijkstra(0).unwrap();
    ///
    /// assert_eq!(paths.distance_to(2), Some(1));
    /// assert_eq!(paths.distance_to(3), None);
    /// assert_eq!(paths.distances(), &[0, 1, 1, UNREACHABLE]);
    /// ```
    fn unit_dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        self.check_node(source)?;

        let mut distances = vec![UNREACHABLE; self.len()];
        distances[source as usize] = 0;
        let mut finalized = self.vertex_bitset_unset();

        let mut rounds = 0;
        for _ in 1..self.number_of_nodes() {
            let Some(u) = select_min(&distances, &finalized) else {
                break;
            };
            rounds += 1;

            finalized.set_bit(u);
            let du = distances[u as usize];
            for v in self.neighbors_of(u) {
                if !finalized.get_bit(v) && du + 1 < distances[v as usize] {
                    distances[v as usize] = du + 1;
                }
            }
        }

        debug!(source, rounds, "unit dijkstra");
        Ok(ShortestPaths { source, distances })
    }
}

impl<G> UnitShortestPaths for G where G: AdjacencyList {}
