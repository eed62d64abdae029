use crate::{gens::*, utils::*};

/// `G(n,p)` graphs generate every possible edge `(u, v)` with `u, v < n` with probability `p`
/// independent from each other.
///
/// Both orientations of a pair and all self-loops are candidates; filtering for undirected graphs
/// or loop-free graphs is up to the caller (see [`RandomGraph`]).
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let edges = Gnp::new().nodes(4).prob(1.0).unwrap().generate(rng);
/// assert_eq!(edges.len(), 16);
///
/// assert!(Gnp::new().prob(1.5).is_err());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`.
    /// Fails with [`GraphError::InvalidArgument`] if `p` is not within `[0, 1]`.
    pub fn prob(mut self, prob: f64) -> Result<Self> {
        if !prob.is_valid_probility() {
            return Err(GraphError::InvalidArgument(
                "edge probability must be within [0, 1]",
            ));
        }
        self.p = prob;
        Ok(self)
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges in lexicographic order
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let Self { n, p } = *self;

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}
