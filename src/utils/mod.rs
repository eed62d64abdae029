/*!
# Utilities

Provides
- [`NodeSequencer`](self::frontier::NodeSequencer) with the bounded queue and stack used as
  traversal frontiers,
- a small helper trait for probabilities used by the random generators.
*/

use num::{One, Zero};

pub mod frontier;

pub use frontier::{BoundedQueue, BoundedStack, NodeSequencer};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
