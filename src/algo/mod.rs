/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the adjacency-list representations.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraph::algo::*;
```
and gain access to traversals, unit-weight shortest paths, topological sorting, cycle detection
and relabelling clones.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod ordering;
mod relabel;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::*};

pub use ordering::*;
pub use relabel::*;
pub use shortest_path::*;
pub use traversal::*;
