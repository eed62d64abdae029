use tracing::trace;

use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// A directed multigraph representation. Only out-neighbors are stored, so in-degrees are
/// computed by scanning every neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed representation using prepend-ordered adjacency lists
pub type AdjList = DirectedGraph<ListNeighborhood>;

impl_common_graph_ops!(DirectedGraph<Nbs> => nbs, Directed);

impl<Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        self.nbs[u as usize].add_neighbor(v);
        self.num_edges += 1;

        trace!(u, v, "add directed edge");
        Ok(())
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.contains_node(v) {
            return false;
        }

        let removed = self
            .nbs
            .get_mut(u as usize)
            .is_some_and(|nbs| nbs.try_remove_neighbor(v));

        if removed {
            self.num_edges -= 1;
            trace!(u, v, "remove directed edge");
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn one_way_edges() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 1]);
        assert!(graph.neighbors_of(2).next().is_none());

        // the check only looks at the neighborhood of the first argument
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));

        assert_eq!(graph.out_degree_of(0), Ok(2));
        assert_eq!(graph.in_degree_of(0), Ok(0));
        assert_eq!(graph.in_degree_of(2), Ok(2));
    }

    #[test]
    fn remove_is_directional() {
        let mut graph = AdjList::from_edges(3, [(0, 1), (1, 0), (0, 1)]).unwrap();

        assert!(!graph.remove_edge(2, 0));
        assert!(graph.remove_edge(0, 1));
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));

        assert!(graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(!graph.remove_edge(0, 1));
        assert!(!graph.remove_edge(7, 1));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = AdjList::try_new(2).unwrap();
        assert!(graph.add_edge(0, 2).is_err());
        assert!(graph.add_edge(2, 0).is_err());
        assert_eq!(graph.number_of_edges(), 0);
    }
}
