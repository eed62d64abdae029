/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Traversal iterators for BFS and DFS over bounded frontiers.
- The `TraversalState` abstraction to query visited-states mid-traversal.
- `RankFromOrder` that turns a complete traversal into a ranking.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

Neighbors are always explored in adjacency-list order (most recently inserted first), so the
orders produced here are deterministic and part of the contract.

Both iterators yield `Result<Node>`. An error can only stem from a frontier overflow, which the
single-visit invariant rules out; after reporting it once an iterator is exhausted.
*/

use tracing::debug;

use super::*;

/// Common interface for maintaining and querying visited-states
/// during a traversal.
pub trait TraversalState {
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &NodeBitSet;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().get_bit(u)
    }
}

/// Gives access to the graph an algorithm operates on
pub trait WithGraphRef<G> {
    /// Returns the graph being traversed.
    fn graph_ref(&self) -> &G;
}

/// Breadth-first search iterator.
///
/// Nodes are marked visited when they are enqueued, so every reachable node is enqueued and
/// yielded exactly once. The queue holds at most `n` nodes.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: BoundedQueue<Node>,
    restart_lb: Node,
    failed: bool,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting from `start`.
    /// Fails with [`GraphError::OutOfRange`] if `start` is not a node.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        debug!(start, "bfs");

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        let mut queue = BoundedQueue::with_capacity(graph.len());
        queue.push(start)?;

        Ok(Self {
            graph,
            visited,
            queue,
            restart_lb: 0,
            failed: false,
        })
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// *true* iff successful. Requires that search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> Result<bool> {
        debug_assert!(self.queue.is_empty());

        let Some(u) = self.next_unvisited() else {
            return Ok(false);
        };

        self.visited.set_bit(u);
        self.queue.push(u)?;
        self.failed = false;
        Ok(true)
    }

    fn next_unvisited(&mut self) -> Option<Node> {
        let u = (self.restart_lb..self.graph.number_of_nodes()).find(|&u| !self.visited.get_bit(u))?;
        self.restart_lb = u + 1;
        Some(u)
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let u = self.queue.pop()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                if let Err(err) = self.queue.push(v) {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }

        Some(Ok(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.cardinality()),
        )
    }
}

/// A frame of the explicit DFS stack: a node and the index of its next neighbor to inspect
type Frame = (Node, NumNodes);

/// Depth-first search iterator yielding nodes in pre-order.
///
/// The order is identical to the textbook recursive formulation: a node is marked and yielded on
/// entry, then each of its unvisited neighbors is descended into in adjacency-list order.
/// Recursion is replaced by an explicit stack of at most `n` frames.
pub struct Dfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: BoundedStack<Frame>,
    entered: Option<Node>,
    restart_lb: Node,
    failed: bool,
}

impl<'a, G> Dfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new DFS starting from `start`.
    /// Fails with [`GraphError::OutOfRange`] if `start` is not a node.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        debug!(start, "dfs");

        let mut dfs = Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: BoundedStack::with_capacity(graph.len()),
            entered: None,
            restart_lb: 0,
            failed: false,
        };
        dfs.enter(start)?;

        Ok(dfs)
    }

    fn enter(&mut self, u: Node) -> Result<()> {
        self.visited.set_bit(u);
        self.stack.push((u, 0))?;
        self.entered = Some(u);
        Ok(())
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// *true* iff successful. Requires that search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> Result<bool> {
        debug_assert!(self.stack.is_empty());

        let Some(u) = (self.restart_lb..self.graph.number_of_nodes())
            .find(|&u| !self.visited.get_bit(u))
        else {
            return Ok(false);
        };

        self.restart_lb = u + 1;
        self.failed = false;
        self.enter(u)?;
        Ok(true)
    }

    /// Advances the stack until a new node is entered
    fn descend(&mut self) -> Result<Option<Node>> {
        while let Some((u, i)) = self.stack.pop() {
            if i == self.graph.degree_of(u) {
                continue;
            }

            // we just popped, so re-pushing the frame cannot overflow
            self.stack.push((u, i + 1))?;

            let v = self.graph.ith_neighbor(u, i);
            if !self.visited.get_bit(v) {
                self.enter(v)?;
                return Ok(self.entered.take());
            }
        }

        Ok(None)
    }
}

impl<G> Iterator for Dfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(u) = self.entered.take() {
            return Some(Ok(u));
        }

        match self.descend() {
            Ok(next) => next.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

macro_rules! impl_traversal_common {
    ($search:ident) => {
        impl<G: AdjacencyList> TraversalState for $search<'_, G> {
            fn visited(&self) -> &NodeBitSet {
                &self.visited
            }
        }

        impl<G: AdjacencyList> WithGraphRef<G> for $search<'_, G> {
            fn graph_ref(&self) -> &G {
                self.graph
            }
        }

        impl<'a, G: AdjacencyList> RankFromOrder<'a, G> for $search<'a, G> {}
    };
}

impl_traversal_common!(Bfs);
impl_traversal_common!(Dfs);

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Result<Node>> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let ranking = g.bfs(1).unwrap().ranking().unwrap();
    /// assert_eq!(ranking, Some(vec![2, 0, 1]));
    /// ```
    fn ranking(mut self) -> Result<Option<Vec<NumNodes>>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: NumNodes = 0;

        for u in self.by_ref() {
            let u = u?;
            debug_assert_eq!(ranking[u as usize], INVALID_NODE);
            ranking[u as usize] = rank;
            rank += 1;
        }

        Ok((rank == self.graph_ref().number_of_nodes()).then_some(ranking))
    }
}

/// Provides convenient traversal methods (BFS, DFS, reachability)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect::<Result<_>>().unwrap();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(4, [(0, 1), (1, 2), (0, 3)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect::<Result<_>>().unwrap();
    /// assert_eq!(order, vec![0, 3, 1, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Collects the BFS order from `start`
    fn bfs_order(&self, start: Node) -> Result<Vec<Node>> {
        self.bfs(start)?.collect()
    }

    /// Collects the DFS pre-order from `start`
    fn dfs_order(&self, start: Node) -> Result<Vec<Node>> {
        self.dfs(start)?.collect()
    }

    /// Returns *true* if there is a (directed) path from `from` to `to`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(g.is_reachable(0, 2), Ok(true));
    /// assert_eq!(g.is_reachable(2, 0), Ok(false));
    /// ```
    fn is_reachable(&self, from: Node, to: Node) -> Result<bool> {
        self.check_node(to)?;
        for u in self.bfs(from)? {
            if u? == to {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn sample() -> AdjListUndir {
        AdjListUndir::from_edges(5, [(0, 1), (0, 4), (1, 2), (1, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn bfs_prepend_order() {
        let graph = sample();
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 4, 1, 3, 2]);
        assert_eq!(graph.bfs_order(2).unwrap(), vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn dfs_prepend_order() {
        let graph = sample();
        // 0 -> 4 -> 3 -> 1 -> 2
        assert_eq!(graph.dfs_order(0).unwrap(), vec![0, 4, 3, 1, 2]);
        assert_eq!(graph.dfs_order(2).unwrap(), vec![2, 1, 3, 4, 0]);
    }

    #[test]
    fn dfs_matches_recursion() {
        fn recurse<G: AdjacencyList>(g: &G, u: Node, visited: &mut Vec<bool>, out: &mut Vec<Node>) {
            visited[u as usize] = true;
            out.push(u);
            for v in g.neighbors_of(u) {
                if !visited[v as usize] {
                    recurse(g, v, visited, out);
                }
            }
        }

        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for n in [1 as NumNodes, 5, 20, 60] {
            for m in [n / 2, n, n * 3] {
                let graph = AdjListUndir::from_edges(n, random_multigraph_edges(rng, n, m)).unwrap();
                let directed = AdjList::from_edges(n, random_multigraph_edges(rng, n, m)).unwrap();

                for start in [0, n / 2, n - 1] {
                    let mut expected = Vec::new();
                    recurse(&graph, start, &mut vec![false; n as usize], &mut expected);
                    assert_eq!(graph.dfs_order(start).unwrap(), expected);

                    let mut expected = Vec::new();
                    recurse(&directed, start, &mut vec![false; n as usize], &mut expected);
                    assert_eq!(directed.dfs_order(start).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn visit_reachable_exactly_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        for n in [1 as NumNodes, 10, 40] {
            for m in [n / 3, n, n * 4] {
                let graph = AdjListUndir::from_edges(n, random_multigraph_edges(rng, n, m)).unwrap();

                for start in graph.vertices() {
                    let reachable = reachable_set(&graph, start);
                    for order in [graph.bfs_order(start).unwrap(), graph.dfs_order(start).unwrap()] {
                        assert_eq!(order[0], start);
                        assert!(order.iter().all_unique());
                        assert_eq!(order.iter().copied().sorted().collect_vec(), reachable);
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_layers_are_monotone() {
        let graph = sample();
        let order = graph.bfs_order(0).unwrap();

        let mut layer = vec![NumNodes::MAX; 5];
        layer[0] = 0;
        for &u in &order {
            for v in graph.neighbors_of(u) {
                layer[v as usize] = layer[v as usize].min(layer[u as usize] + 1);
            }
        }
        assert!(order.iter().tuple_windows().all(|(&a, &b)| layer[a as usize] <= layer[b as usize]));
    }

    #[test]
    fn start_out_of_range() {
        let graph = sample();
        assert!(matches!(graph.bfs(5), Err(GraphError::OutOfRange { node: 5, .. })));
        assert!(matches!(graph.dfs(7), Err(GraphError::OutOfRange { node: 7, .. })));
        assert!(graph.is_reachable(0, 9).is_err());
    }

    #[test]
    fn isolated_start() {
        let graph = AdjListUndir::from_edges(3, [(1, 2)]).unwrap();
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0]);
        assert_eq!(graph.dfs_order(0).unwrap(), vec![0]);
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let graph = AdjListUndir::from_edges(3, [(0, 0), (0, 1), (0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.dfs_order(0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn restart_covers_all_components() {
        let graph = AdjListUndir::from_edges(6, [(0, 1), (2, 3), (5, 4)]).unwrap();

        let mut dfs = graph.dfs(2).unwrap();
        let mut order = Vec::new();
        loop {
            order.extend(dfs.by_ref().map(|u| u.unwrap()));
            if !dfs.try_restart_at_unvisited().unwrap() {
                break;
            }
        }
        assert_eq!(order, vec![2, 3, 0, 1, 4, 5]);
        assert!(graph.vertices().all(|u| dfs.did_visit_node(u)));

        let mut bfs = graph.bfs(4).unwrap();
        let mut order = bfs.by_ref().map(|u| u.unwrap()).collect_vec();
        while bfs.try_restart_at_unvisited().unwrap() {
            order.extend(bfs.by_ref().map(|u| u.unwrap()));
        }
        assert_eq!(order, vec![4, 5, 0, 1, 2, 3]);
    }

    #[test]
    fn ranking() {
        let graph = sample();
        assert_eq!(graph.bfs(0).unwrap().ranking().unwrap(), Some(vec![0, 2, 4, 3, 1]));

        let disconnected = AdjListUndir::from_edges(3, [(0, 1)]).unwrap();
        assert_eq!(disconnected.dfs(0).unwrap().ranking().unwrap(), None);
    }

    #[test]
    fn reachability() {
        let graph = AdjList::from_edges(4, [(0, 1), (1, 2), (3, 2)]).unwrap();
        assert_eq!(graph.is_reachable(0, 2), Ok(true));
        assert_eq!(graph.is_reachable(0, 3), Ok(false));
        assert_eq!(graph.is_reachable(3, 3), Ok(true));
        assert_eq!(graph.is_reachable(2, 1), Ok(false));
    }
}
