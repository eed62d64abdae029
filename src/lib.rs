/*!
`adjgraph` is a small graph library built around **adjacency lists**: every node keeps an ordered
list of its neighbors and new neighbors are always placed in front.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Node ids never change after construction and a graph always has at least one node.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are **multigraphs**: adding the same edge twice stores it twice, and self-loops are allowed.

### Directed vs Undirected

- [`AdjListUndir`](crate::repr::AdjListUndir): adding `{u, v}` inserts `v` into the list of `u`
  *and* `u` into the list of `v`. A self-loop therefore shows up twice in the list of its node.
- [`AdjList`](crate::repr::AdjList): adding `(u, v)` only inserts `v` into the list of `u`.

### Neighbor order

Neighbor lists are **prepend-ordered**: iterating the neighbors of `u` yields the most recently
added neighbor first. All traversals inspect neighbors in exactly this order, so the orders they
produce are deterministic.

# Errors

Fallible operations return [`Result`], failing with a [`GraphError`]:
- [`GraphError::InvalidArgument`] for malformed arguments such as a graph with zero nodes,
- [`GraphError::OutOfRange`] if a node id is not smaller than the number of nodes,
- [`GraphError::CapacityExceeded`] if a bounded traversal frontier overflows.

A failing operation leaves the graph untouched.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both representations,
- [`algo`] includes algorithm traits implemented on the graphs themselves: BFS (`graph.bfs(start)`), DFS,
  unit-weight shortest paths, topological sorting, cycle detection and relabelling clones,
- [`gens`] includes deterministic substructures (paths, cycles, stars) and a `G(n,p)` generator,
- [`io`] includes readers and writers for edge lists, DOT, and a plain adjacency listing,
- [`utils`] includes the bounded frontiers used by the traversals.

In most use-cases, `use adjgraph::{prelude::*, algo::*};` suffices for your needs.

```
use adjgraph::{prelude::*, algo::*};

let mut g = AdjListUndir::try_new(5).unwrap();
g.add_edges([(0, 1), (0, 4), (1, 2), (1, 3), (3, 4)]).unwrap();

assert_eq!(g.bfs_order(0).unwrap(), vec![0, 4, 1, 3, 2]);
assert_eq!(g.unit_dijkstra(0).unwrap().distance_to(3), Some(2));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `adjgraph::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
