// src/graph/path.rs
//! Weighted shortest paths (Dijkstra) with deterministic tie-breaking.
//!
//! Frontier entries are ordered by accumulated cost, then by node, then by
//! the path that reached them. Equal-cost alternatives therefore resolve the
//! same way on every run.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use super::store::WordGraph;
use crate::error::{GraphError, Result};
use crate::text::normalize_word;

/// A realized shortest path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub cost: u64,
    /// Nodes from start to target, both inclusive.
    pub path: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
struct Candidate {
    cost: u64,
    node: String,
    path: Vec<String>,
}

impl Ord for Candidate {
    // Reversed so `BinaryHeap` pops the smallest candidate first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Candidate {
    fn into_route(self) -> Route {
        let mut path = self.path;
        path.push(self.node);
        Route {
            cost: self.cost,
            path,
        }
    }
}

struct Search<'g> {
    graph: &'g WordGraph,
    frontier: BinaryHeap<Candidate>,
    finalized: HashSet<String>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g WordGraph, start: &str) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            cost: 0,
            node: start.to_string(),
            path: Vec::new(),
        });
        Self {
            graph,
            frontier,
            finalized: HashSet::new(),
        }
    }

    /// Pops the next candidate whose node has not been finalized yet.
    fn next_final(&mut self) -> Option<Candidate> {
        while let Some(cand) = self.frontier.pop() {
            if self.finalized.insert(cand.node.clone()) {
                return Some(cand);
            }
        }
        None
    }

    fn relax(&mut self, cand: &Candidate) {
        let mut via = cand.path.clone();
        via.push(cand.node.clone());

        for (neighbor, weight) in self.graph.successors(&cand.node) {
            if self.finalized.contains(neighbor) {
                continue;
            }
            self.frontier.push(Candidate {
                cost: cand.cost + u64::from(*weight),
                node: neighbor.clone(),
                path: via.clone(),
            });
        }
    }
}

/// Shortest paths from `start` to every other reachable word, keyed by target.
///
/// # Errors
/// [`GraphError::StartNotFound`] if `start` is absent;
/// [`GraphError::NoReachableNodes`] if nothing else can be reached.
pub fn shortest_paths_from(graph: &WordGraph, start: &str) -> Result<BTreeMap<String, Route>> {
    let start = normalize_word(start);
    if !graph.has_node(&start) {
        return Err(GraphError::StartNotFound(start));
    }

    let mut search = Search::new(graph, &start);
    let mut routes = BTreeMap::new();

    while let Some(cand) = search.next_final() {
        search.relax(&cand);
        routes.insert(cand.node.clone(), cand.into_route());
    }

    routes.remove(&start);
    tracing::debug!(%start, reachable = routes.len(), "all-target search finished");

    if routes.is_empty() {
        return Err(GraphError::NoReachableNodes(start));
    }
    Ok(routes)
}

/// Shortest path from `start` to `end`.
///
/// # Errors
/// Not-found errors for absent endpoints, or [`GraphError::PathNotFound`].
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> Result<Route> {
    let (start, end) = check_endpoints(graph, start, end)?;
    let mut search = Search::new(graph, &start);

    while let Some(cand) = search.next_final() {
        if cand.node == end {
            return Ok(cand.into_route());
        }
        search.relax(&cand);
    }

    Err(GraphError::PathNotFound {
        from: start,
        to: end,
    })
}

/// Every shortest path from `start` to `end`, sorted, with their shared cost.
///
/// # Errors
/// Same as [`shortest_path`].
pub fn all_shortest_paths(
    graph: &WordGraph,
    start: &str,
    end: &str,
) -> Result<(u64, Vec<Vec<String>>)> {
    let (start, end) = check_endpoints(graph, start, end)?;
    let (dist, preds) = distances_with_predecessors(graph, &start, &end);

    let Some(&cost) = dist.get(end.as_str()) else {
        return Err(GraphError::PathNotFound {
            from: start,
            to: end,
        });
    };

    let mut paths = Vec::new();
    let mut stack = vec![end.as_str()];
    unwind(&preds, &start, &mut stack, &mut paths);
    paths.sort();
    Ok((cost, paths))
}

fn check_endpoints(graph: &WordGraph, start: &str, end: &str) -> Result<(String, String)> {
    let start = normalize_word(start);
    let end = normalize_word(end);
    if !graph.has_node(&start) {
        return Err(GraphError::StartNotFound(start));
    }
    if !graph.has_node(&end) {
        return Err(GraphError::EndNotFound(end));
    }
    Ok((start, end))
}

type Predecessors<'g> = HashMap<&'g str, Vec<&'g str>>;

fn distances_with_predecessors<'g>(
    graph: &'g WordGraph,
    start: &str,
    end: &str,
) -> (HashMap<&'g str, u64>, Predecessors<'g>) {
    let mut dist: HashMap<&str, u64> = HashMap::new();
    let mut preds: Predecessors = HashMap::new();
    let mut done: HashSet<&str> = HashSet::new();
    let mut heap = BinaryHeap::new();

    let Some((start_key, _)) = graph.node_entry(start) else {
        return (dist, preds);
    };
    dist.insert(start_key, 0);
    heap.push(Reverse((0u64, start_key)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if !done.insert(node) {
            continue;
        }
        if node == end {
            break;
        }
        for (next, weight) in graph.successors(node) {
            let next = next.as_str();
            let candidate = cost + u64::from(*weight);
            match dist.get(next).copied() {
                Some(known) if candidate > known => {}
                Some(known) if candidate == known => {
                    preds.entry(next).or_default().push(node);
                }
                _ => {
                    dist.insert(next, candidate);
                    preds.insert(next, vec![node]);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }
    }

    (dist, preds)
}

/// Walks predecessor links back to `start`, emitting each complete path.
fn unwind<'g>(
    preds: &Predecessors<'g>,
    start: &str,
    stack: &mut Vec<&'g str>,
    out: &mut Vec<Vec<String>>,
) {
    let Some(&current) = stack.last() else {
        return;
    };
    if current == start {
        out.push(stack.iter().rev().map(|s| (*s).to_string()).collect());
        return;
    }
    for &prev in preds.get(current).map(Vec::as_slice).unwrap_or_default() {
        stack.push(prev);
        unwind(preds, start, stack, out);
        stack.pop();
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn cand(cost: u64, node: &str, path: &[&str]) -> Candidate {
        Candidate {
            cost,
            node: node.to_string(),
            path: path.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_frontier_order() {
        let mut heap = BinaryHeap::new();
        heap.push(cand(2, "a", &[]));
        heap.push(cand(1, "z", &["y"]));
        heap.push(cand(1, "z", &["x"]));
        heap.push(cand(1, "b", &["q"]));

        let order: Vec<(u64, String, Vec<String>)> = std::iter::from_fn(|| heap.pop())
            .map(|c| (c.cost, c.node, c.path))
            .collect();
        assert_eq!(order[0].1, "b");
        assert_eq!(order[1].2, vec!["x".to_string()]);
        assert_eq!(order[2].2, vec!["y".to_string()]);
        assert_eq!(order[3].0, 2);
    }
}
