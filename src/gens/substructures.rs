/*!
# Substructure Generators

Adds common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Stars**

Edges are inserted through [`GraphEdgeEditing::add_edge`], so the usual multigraph semantics
apply and the first out-of-range node aborts with an error. Edges inserted before the error stay.

# Example

```rust
use adjgraph::{prelude::*, gens::*};

let mut g = AdjList::try_new(5).unwrap();
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.edge_multiset(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **path**.
    ///
    /// # Example
    /// ```rust
    /// use adjgraph::{prelude::*, gens::*};
    ///
    /// let mut g = AdjListUndir::try_new(4).unwrap();
    /// g.connect_path([0, 1, 2, 3]).unwrap();
    ///
    /// assert!(g.has_edge(1, 0));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to each of the given `leaves`
    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjList::try_new(6).unwrap();
            g.connect_path([]).unwrap();
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjList::try_new(6).unwrap();
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjList::try_new(6).unwrap();
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjListUndir::try_new(6).unwrap();
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert_eq!(g.degree_of(1), 2);
        }

        {
            let mut g = AdjList::try_new(6).unwrap();
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
        }
    }

    #[test]
    fn test_connect_star() {
        let mut g = AdjListUndir::try_new(5).unwrap();
        g.connect_star(2, [0, 1, 3, 4]).unwrap();

        assert_eq!(g.neighbors_of(2).collect_vec(), vec![4, 3, 1, 0]);
        assert!(g.vertices().filter(|&u| u != 2).all(|u| g.degree_of(u) == 1));
    }

    #[test]
    fn out_of_range_aborts() {
        let mut g = AdjList::try_new(3).unwrap();
        assert_eq!(
            g.connect_path([0, 1, 3, 2]),
            Err(GraphError::OutOfRange {
                node: 3,
                number_of_nodes: 3
            })
        );
        assert_eq!(g.number_of_edges(), 1);
    }
}
