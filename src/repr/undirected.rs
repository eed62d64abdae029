use tracing::trace;

use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// An undirected multigraph representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Undirected representation using prepend-ordered adjacency lists
pub type AdjListUndir = UndirectedGraph<ListNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        // a self-loop ends up twice in the neighborhood of `u`
        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;

        trace!(u, v, "add undirected edge");
        Ok(())
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.contains_node(u) || !self.contains_node(v) {
            return false;
        }

        let forward = self.nbs[u as usize].try_remove_neighbor(v);
        let backward = self.nbs[v as usize].try_remove_neighbor(u);
        debug_assert_eq!(forward, backward);

        if forward || backward {
            self.num_edges -= 1;
            trace!(u, v, "remove undirected edge");
        }

        forward || backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample() -> AdjListUndir {
        AdjListUndir::from_edges(5, [(0, 1), (0, 4), (1, 2), (1, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn neighbors_newest_first() {
        let graph = sample();

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![4, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![3, 2, 0]);
        assert_eq!(graph.neighbors_of(4).collect_vec(), vec![3, 0]);
        assert_eq!(graph.ith_neighbor(1, 0), 3);
        assert_eq!(graph.number_of_edges(), 5);
    }

    #[test]
    fn add_edge_out_of_range_is_atomic() {
        let mut graph = sample();
        let before = graph.clone();

        assert_eq!(
            graph.add_edge(1, 5),
            Err(GraphError::OutOfRange {
                node: 5,
                number_of_nodes: 5
            })
        );
        assert!(graph.add_edge(9, 0).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn multigraph_semantics() {
        let mut graph = AdjListUndir::try_new(3).unwrap();
        graph.add_edges([(0, 1), (0, 1), (2, 2)]).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 1]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![2, 2]);
        assert_eq!(graph.out_degree_of(2), Ok(2));
        assert_eq!(graph.in_degree_of(2), Ok(2));
        assert_eq!(graph.in_degree_of(1), graph.out_degree_of(1));

        assert!(graph.remove_edge(1, 0));
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));

        assert!(graph.remove_edge(2, 2));
        assert!(!graph.has_edge(2, 2));
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn remove_first_occurrence_keeps_order() {
        let mut graph = AdjListUndir::try_new(4).unwrap();
        graph.add_edges([(0, 1), (0, 2), (0, 1), (0, 3)]).unwrap();
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![3, 1, 2, 1]);

        assert!(graph.remove_edge(0, 1));
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![3, 2, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut graph = sample();
        let before = graph.clone();

        assert!(!graph.remove_edge(0, 3));
        assert!(!graph.remove_edge(2, 4));
        assert!(!graph.remove_edge(0, 17));
        assert!(!graph.remove_edge(42, 43));
        assert_eq!(graph, before);
    }

    #[test]
    fn has_edge_queries() {
        let graph = sample();

        for (u, v) in [(0, 1), (0, 4), (1, 2), (1, 3), (3, 4)] {
            assert!(graph.has_edge(u, v));
            assert!(graph.has_edge(v, u));
        }
        assert!(!graph.has_edge(0, 2));
        assert!(!graph.has_edge(0, 5));
        assert!(!graph.has_edge(5, 0));
    }
}
