#![cfg(test)]

use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, *};

/// Creates exactly `m` random edges for nodes `0..n`. Duplicates and self-loops are kept.
pub fn random_multigraph_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// Creates `m` random edges `(u, v)` with `u < v` which thus form a DAG
pub fn random_dag_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    if n < 2 {
        return Vec::new();
    }

    (0..m)
        .map(|_| {
            let u = rng.random_range(0..n - 1);
            Edge(u, rng.random_range(u + 1..n))
        })
        .collect_vec()
}

/// Sorted list of all nodes reachable from `start`, computed by naive fixpoint iteration
pub fn reachable_set<G: AdjacencyList>(graph: &G, start: Node) -> Vec<Node> {
    let mut reached = vec![false; graph.len()];
    reached[start as usize] = true;

    let mut changed = true;
    while changed {
        changed = false;
        for u in graph.vertices() {
            if !reached[u as usize] {
                continue;
            }
            for v in graph.neighbors_of(u) {
                if !reached[v as usize] {
                    reached[v as usize] = true;
                    changed = true;
                }
            }
        }
    }

    graph.vertices().filter(|&u| reached[u as usize]).collect_vec()
}
