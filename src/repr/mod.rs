/*!
# Representations

Graphs store one ordered [`Neighborhood`] per node, indexed by node id. Two orientations exist:

- [`UndirectedGraph`]: inserting `{u, v}` touches both neighborhoods,
- [`DirectedGraph`]: inserting `(u, v)` only touches the neighborhood of `u`.

Both are multigraphs: inserting an edge twice stores it twice.
*/

use tracing::debug;

use crate::{error::*, ops::*, *};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$generic:ident> => $nbs:ident, $directed:ident) => {
            impl<$generic: Neighborhood> GraphType for $struct<$generic> {
                type Dir = $directed;
            }

            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }

                fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
                    self.$nbs[u as usize].ith_neighbor(i)
                }
            }

            impl<$generic: Neighborhood> AdjacencyTest for $struct<$generic> {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$nbs
                        .get(u as usize)
                        .is_some_and(|nbs| nbs.has_neighbor(v))
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn try_new(n: NumNodes) -> Result<Self> {
                    if n == 0 {
                        return Err(GraphError::InvalidArgument(
                            "a graph needs at least one node",
                        ));
                    }

                    debug!(n, directed = <$directed as GraphDir>::DIRECTED, "new graph");
                    Ok(Self {
                        $nbs: vec![$generic::default(); n as usize],
                        num_edges: 0,
                    })
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn zero_nodes_is_rejected() {
        assert!(matches!(
            AdjListUndir::try_new(0),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            AdjList::try_new(0),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = AdjListUndir::try_new(n).unwrap();

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
        }
    }

    #[test]
    fn random_undirected_degrees_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 10, 20, 50] {
            for m in [n, n * 3, n * 10] {
                let edges = random_multigraph_edges(rng, n, m);
                let graph = AdjListUndir::from_edges(n, edges.iter()).unwrap();

                assert_eq!(graph.number_of_edges(), m);
                for u in graph.vertices() {
                    assert_eq!(graph.in_degree_of(u), graph.out_degree_of(u));
                    for v in graph.vertices() {
                        assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                    }
                }

                let mut expected = edges.iter().map(|e| e.normalized()).collect_vec();
                expected.sort_unstable();
                assert_eq!(graph.edge_multiset(), expected);
            }
        }
    }

    #[test]
    fn random_directed_degrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [1 as NumNodes, 10, 20, 50] {
            for m in [n, n * 3, n * 10] {
                let edges = random_multigraph_edges(rng, n, m);
                let graph = AdjList::from_edges(n, edges.iter()).unwrap();

                assert_eq!(graph.number_of_edges(), m);
                for u in graph.vertices() {
                    let out = edges.iter().filter(|e| e.0 == u).count() as NumNodes;
                    let inc = edges.iter().filter(|e| e.1 == u).count() as NumNodes;
                    assert_eq!(graph.out_degree_of(u), Ok(out));
                    assert_eq!(graph.in_degree_of(u), Ok(inc));
                }

                let mut expected = edges.clone();
                expected.sort_unstable();
                assert_eq!(graph.edge_multiset(), expected);
            }
        }
    }

    #[test]
    fn degree_queries_out_of_range() {
        let graph = AdjListUndir::try_new(2).unwrap();
        assert_eq!(
            graph.in_degree_of(2),
            Err(GraphError::OutOfRange {
                node: 2,
                number_of_nodes: 2
            })
        );
        assert!(graph.out_degree_of(5).is_err());
    }
}
