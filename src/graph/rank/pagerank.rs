// src/graph/rank/pagerank.rs
//! `PageRank` power iteration over the word graph.

use std::collections::HashMap;

use crate::config::RankConfig;
use crate::graph::store::WordGraph;

/// Sparse column-stochastic transition operator.
///
/// `links[src]` lists `(dest, probability)` for each out-edge of `src`.
/// Dangling nodes have no links; their mass is spread uniformly in
/// [`Transition::apply`].
struct Transition {
    links: Vec<Vec<(usize, f64)>>,
    dangling: Vec<usize>,
}

impl Transition {
    #[allow(clippy::cast_precision_loss)]
    fn build(graph: &WordGraph, nodes: &[&str], index: &HashMap<&str, usize>) -> Self {
        let mut links = Vec::with_capacity(nodes.len());
        let mut dangling = Vec::new();

        for (src_idx, src) in nodes.iter().enumerate() {
            let successors = graph.successors(src);
            let total: u64 = successors.values().map(|w| u64::from(*w)).sum();
            if total == 0 {
                dangling.push(src_idx);
                links.push(Vec::new());
                continue;
            }
            links.push(
                successors
                    .iter()
                    .filter_map(|(dest, weight)| {
                        let dest_idx = index.get(dest.as_str())?;
                        Some((*dest_idx, f64::from(*weight) / total as f64))
                    })
                    .collect(),
            );
        }

        Self { links, dangling }
    }

    /// Computes `M * pr`.
    #[allow(clippy::cast_precision_loss, clippy::indexing_slicing)] // Guarded: indices come from `nodes`, len n
    fn apply(&self, pr: &[f64]) -> Vec<f64> {
        let n = self.links.len();
        let dangling_mass: f64 = self.dangling.iter().map(|&i| pr[i]).sum();
        let mut out = vec![dangling_mass / n as f64; n];

        for (src, edges) in self.links.iter().enumerate() {
            for &(dest, p) in edges {
                out[dest] += p * pr[src];
            }
        }
        out
    }
}

/// Computes `PageRank` for every node, seeded from per-word statistics.
///
/// Nodes are indexed in lexicographic order so results do not depend on
/// hash or insertion order.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::implicit_hasher)]
pub fn compute(
    graph: &WordGraph,
    seeds: &HashMap<String, f64>,
    params: &RankConfig,
) -> HashMap<String, f64> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return HashMap::new();
    }

    let n = nodes.len() as f64;
    let index: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, w)| (*w, i)).collect();
    let matrix = Transition::build(graph, &nodes, &index);
    let mut ranks = initialize_ranks(&nodes, seeds, n);

    let mut rounds = 0;
    for _ in 0..params.max_iter {
        rounds += 1;
        let next = iterate_once(&matrix, &ranks, params.damping, n);
        let delta = l1_distance(&next, &ranks);
        ranks = next;
        if delta < params.tol {
            break;
        }
    }
    tracing::debug!(rounds, nodes = nodes.len(), "pagerank converged");

    nodes
        .iter()
        .zip(ranks)
        .map(|(w, r)| ((*w).to_string(), r))
        .collect()
}

fn initialize_ranks(nodes: &[&str], seeds: &HashMap<String, f64>, n: f64) -> Vec<f64> {
    let mut ranks: Vec<f64> = nodes
        .iter()
        .map(|w| seeds.get(*w).copied().unwrap_or(1.0 / n))
        .collect();
    normalize(&mut ranks, n);
    ranks
}

fn iterate_once(matrix: &Transition, ranks: &[f64], damping: f64, n: f64) -> Vec<f64> {
    let teleport = (1.0 - damping) / n;
    matrix
        .apply(ranks)
        .into_iter()
        .map(|incoming| damping * incoming + teleport)
        .collect()
}

/// Scales the vector to sum to 1; falls back to uniform when the sum is not positive.
fn normalize(ranks: &mut [f64], n: f64) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 && total.is_finite() {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    } else {
        ranks.fill(1.0 / n);
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_falls_back_to_uniform() {
        let mut ranks = vec![0.0, 0.0, 0.0, 0.0];
        normalize(&mut ranks, 4.0);
        assert_eq!(ranks, vec![0.25; 4]);
    }

    #[test]
    fn test_normalize_negative_total_falls_back_to_uniform() {
        let mut ranks = vec![-1.0, 0.5];
        normalize(&mut ranks, 2.0);
        assert_eq!(ranks, vec![0.5, 0.5]);
    }

    #[test]
    fn test_normalize_scales_to_unit_norm() {
        let mut ranks = vec![1.0, 3.0];
        normalize(&mut ranks, 2.0);
        assert_eq!(ranks, vec![0.25, 0.75]);
    }

    #[test]
    fn test_transition_columns_are_stochastic() {
        let mut g = WordGraph::new();
        g.build(&["a", "b", "a", "c", "a", "b"]);
        let nodes = g.nodes();
        let index: HashMap<&str, usize> =
            nodes.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        let m = Transition::build(&g, &nodes, &index);

        for (src, edges) in m.links.iter().enumerate() {
            if m.dangling.contains(&src) {
                assert!(edges.is_empty());
                continue;
            }
            let col: f64 = edges.iter().map(|(_, p)| p).sum();
            assert!((col - 1.0).abs() < 1e-12, "column {src} sums to {col}");
        }
        // a -> b twice, a -> c once
        let to_b = m.links[index["a"]]
            .iter()
            .find(|(dest, _)| *dest == index["b"])
            .map(|(_, p)| *p);
        assert_eq!(to_b, Some(2.0 / 3.0));
        assert_eq!(m.dangling, vec![index["c"]]);
    }

    #[test]
    fn test_apply_preserves_mass() {
        let mut g = WordGraph::new();
        g.build(&["a", "b", "c", "a", "d"]);
        let nodes = g.nodes();
        let index: HashMap<&str, usize> =
            nodes.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        let m = Transition::build(&g, &nodes, &index);

        let out = m.apply(&[0.1, 0.2, 0.3, 0.4]);
        let total: f64 = out.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        // d is dangling: 0.4 spread over 4 nodes, plus a's half-share into d.
        assert!((out[index["d"]] - (0.1 + 0.05)).abs() < 1e-12);
    }
}
