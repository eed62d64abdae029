use std::{
    iter::{Copied, Rev},
    slice::Iter,
};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// Neighborhoods are ordered sequences that may contain a node multiple times.
/// Iteration yields the most recently added neighbor first.
pub trait Neighborhood: Clone + Default {
    /// Returns the number of entries in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood, newest first
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the ith neighbor (0-indexed) in iteration order
    /// ** Panics if `i >= self.num_of_neighbors()` **
    fn ith_neighbor(&self, i: NumNodes) -> Node;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor in front of all existing ones without checking for duplicates
    fn add_neighbor(&mut self, u: Node);

    /// Removes the first occurrence (in iteration order) of `u`.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;
}

/// Neighborhood stored as an append-only vector that is read back-to-front.
/// Adding a neighbor is `O(1)` while behaving like a prepend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNeighborhood(Vec<Node>);

impl Neighborhood for ListNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Rev<Iter<'a, Node>>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().rev().copied()
    }

    fn ith_neighbor(&self, i: NumNodes) -> Node {
        self.0[self.0.len() - 1 - i as usize]
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        // the first occurrence in iteration order is the last one stored
        if let Some(pos) = self.0.iter().rposition(|&v| v == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }
}
