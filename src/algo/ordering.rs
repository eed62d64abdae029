/*!
# Topological Ordering & Cycle Detection

Both algorithms only make sense for directed graphs and are therefore only implemented for graphs
with `GraphType<Dir = Directed>`.

Each runs a depth-first search from every not yet visited node in ascending id order. Neighbors are
explored in adjacency-list order, so results are deterministic. Recursion is replaced by an explicit
stack of `(node, next neighbor index)` frames bounded by the number of nodes.
*/

use tracing::debug;

use super::*;

type Frame = (Node, NumNodes);

/// Ordering related algorithms for directed graphs
pub trait TopologicalOrdering: AdjacencyList + GraphType<Dir = Directed> {
    /// Computes a topological ordering of all nodes: nodes in reverse DFS post-order.
    ///
    /// For a DAG, every edge `(u, v)` has `u` before `v` in the returned order.
    /// The order is computed for cyclic graphs too, but then at least one edge points backwards;
    /// use [`TopologicalOrdering::has_cycle`] to tell the cases apart.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), vec![0, 1, 2, 3]);
    /// ```
    fn topological_sort(&self) -> Result<Vec<Node>> {
        let mut visited = self.vertex_bitset_unset();
        let mut stack: BoundedStack<Frame> = BoundedStack::with_capacity(self.len());
        let mut post_order = Vec::with_capacity(self.len());

        for s in self.vertices() {
            if visited.set_bit(s) {
                continue;
            }
            stack.push((s, 0))?;

            while let Some((u, i)) = stack.pop() {
                if i == self.degree_of(u) {
                    post_order.push(u);
                    continue;
                }

                stack.push((u, i + 1))?;
                let v = self.ith_neighbor(u, i);
                if !visited.set_bit(v) {
                    stack.push((v, 0))?;
                }
            }
        }

        post_order.reverse();
        debug!(n = post_order.len(), "topological sort");
        Ok(post_order)
    }

    /// Returns *true* if the graph contains a directed cycle. Self-loops count as cycles.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjList::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(g.has_cycle(), Ok(false));
    ///
    /// g.add_edge(2, 0).unwrap();
    /// assert_eq!(g.has_cycle(), Ok(true));
    /// ```
    fn has_cycle(&self) -> Result<bool> {
        let mut visited = self.vertex_bitset_unset();
        let mut on_stack = self.vertex_bitset_unset();
        let mut stack: BoundedStack<Frame> = BoundedStack::with_capacity(self.len());

        for s in self.vertices() {
            if visited.set_bit(s) {
                continue;
            }
            on_stack.set_bit(s);
            stack.push((s, 0))?;

            while let Some((u, i)) = stack.pop() {
                if i == self.degree_of(u) {
                    on_stack.clear_bit(u);
                    continue;
                }

                stack.push((u, i + 1))?;
                let v = self.ith_neighbor(u, i);
                if !visited.set_bit(v) {
                    on_stack.set_bit(v);
                    stack.push((v, 0))?;
                } else if on_stack.get_bit(v) {
                    debug!(u, v, "found back edge");
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Returns *true* if `order` lists every node exactly once and no edge points backwards
    fn is_topological_order(&self, order: &[Node]) -> bool {
        if order.len() != self.len() {
            return false;
        }

        let mut rank = vec![INVALID_NODE; self.len()];
        for (i, &u) in order.iter().enumerate() {
            if !self.contains_node(u) || rank[u as usize] != INVALID_NODE {
                return false;
            }
            rank[u as usize] = i as Node;
        }

        self.edges(false)
            .all(|Edge(u, v)| rank[u as usize] < rank[v as usize])
    }
}

impl<G> TopologicalOrdering for G where G: AdjacencyList + GraphType<Dir = Directed> {}
