/*!
# Bounded Frontiers

A traversal keeps its pending work in a *frontier*: a queue for BFS, a stack for DFS.
Both frontiers here have a fixed capacity. Pushing beyond it returns
[`GraphError::CapacityExceeded`] instead of growing or aborting.

Traversals push every node at most once and size their frontier to the number of nodes, so the
error marks a broken invariant rather than a user mistake.
*/

use std::collections::VecDeque;

use tracing::warn;

use crate::error::*;

/// Abstraction for the traversal frontier data structure.
///
/// - [`BoundedQueue`] -> queue semantics -> **BFS**
/// - [`BoundedStack`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates an empty sequencer that holds at most `capacity` items
    fn with_capacity(capacity: usize) -> Self;

    /// Pushes an item into the frontier
    fn push(&mut self, item: T) -> Result<()>;

    /// Removes and returns the next item from the frontier
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;

    /// Returns the maximum number of items
    fn capacity(&self) -> usize;

    /// Returns *true* if the frontier holds no items
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
}

fn overflow(capacity: usize) -> GraphError {
    warn!(capacity, "frontier overflow");
    GraphError::CapacityExceeded { capacity }
}

/// FIFO frontier with a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> NodeSequencer<T> for BoundedQueue<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(overflow(self.capacity));
        }
        self.items.push_back(item);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn cardinality(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// LIFO frontier with a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> NodeSequencer<T> for BoundedStack<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(overflow(self.capacity));
        }
        self.items.push(item);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn cardinality(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut q = BoundedQueue::with_capacity(3);
        for x in [1, 2, 3] {
            q.push(x).unwrap();
        }
        assert_eq!(q.pop(), Some(1));
        q.push(4).unwrap();
        assert_eq!(q.cardinality(), 3);
        assert_eq!([q.pop(), q.pop(), q.pop(), q.pop()], [Some(2), Some(3), Some(4), None]);
        assert!(q.is_empty());
    }

    #[test]
    fn stack_is_lifo() {
        let mut s = BoundedStack::with_capacity(2);
        s.push('a').unwrap();
        s.push('b').unwrap();
        assert_eq!(s.pop(), Some('b'));
        s.push('c').unwrap();
        assert_eq!([s.pop(), s.pop(), s.pop()], [Some('c'), Some('a'), None]);
    }

    #[test]
    fn overflow_is_an_error() {
        let mut q = BoundedQueue::with_capacity(1);
        q.push(0u32).unwrap();
        assert_eq!(q.push(1), Err(GraphError::CapacityExceeded { capacity: 1 }));
        assert_eq!(q.cardinality(), 1);

        let mut s: BoundedStack<u32> = BoundedStack::with_capacity(0);
        assert_eq!(s.push(1), Err(GraphError::CapacityExceeded { capacity: 0 }));
        assert_eq!(s.capacity(), 0);
    }
}
