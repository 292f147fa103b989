// src/graph/walk.rs
//! Random traversal that ends at a dead end or the first repeated edge.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::store::WordGraph;
use crate::error::{GraphError, Result};

/// Cooperative hooks polled once per step of a walk.
pub trait WalkControl {
    /// Called with the path so far before each step.
    fn on_step(&mut self, _path: &[String]) {}

    /// Returning `true` ends the walk with the current path.
    fn should_stop(&mut self, _path: &[String]) -> bool {
        false
    }
}

/// A control that never stops the walk early.
pub struct Unbounded;

impl WalkControl for Unbounded {}

/// Stops once the path holds the given number of nodes.
pub struct StepLimit(pub usize);

impl WalkControl for StepLimit {
    fn should_stop(&mut self, path: &[String]) -> bool {
        path.len() >= self.0
    }
}

/// Adapts a stop predicate and a progress hook into a [`WalkControl`].
pub struct FnWalkControl<S, P> {
    pub stop: S,
    pub progress: P,
}

impl<S, P> WalkControl for FnWalkControl<S, P>
where
    S: FnMut(&[String]) -> bool,
    P: FnMut(&[String]),
{
    fn on_step(&mut self, path: &[String]) {
        (self.progress)(path);
    }

    fn should_stop(&mut self, path: &[String]) -> bool {
        (self.stop)(path)
    }
}

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalkEnd {
    /// The control asked to stop.
    Stopped,
    /// The current word has no successors.
    DeadEnd,
    /// The chosen edge had already been traversed.
    RepeatedEdge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub path: Vec<String>,
    pub end: WalkEnd,
}

/// Walks the graph from a uniformly chosen start node.
///
/// Each step picks uniformly among the distinct successors of the current
/// word, ignoring weights. The walk never traverses the same directed edge
/// twice: it ends just before doing so.
///
/// # Errors
/// [`GraphError::EmptyGraph`] if the graph has no nodes.
pub fn random_walk<R, C>(graph: &WordGraph, rng: &mut R, control: &mut C) -> Result<Walk>
where
    R: Rng + ?Sized,
    C: WalkControl + ?Sized,
{
    let nodes = graph.nodes();
    let Some(&start) = nodes.choose(rng) else {
        return Err(GraphError::EmptyGraph);
    };

    let mut current = start;
    let mut path = vec![start.to_string()];
    let mut visited: HashSet<(&str, &str)> = HashSet::new();

    let end = loop {
        control.on_step(&path);
        if control.should_stop(&path) {
            break WalkEnd::Stopped;
        }

        let successors: Vec<&str> = graph.successors(current).keys().map(String::as_str).collect();
        let Some(&next) = successors.choose(rng) else {
            break WalkEnd::DeadEnd;
        };

        if !visited.insert((current, next)) {
            break WalkEnd::RepeatedEdge;
        }
        tracing::trace!(from = current, to = next, "walk step");
        path.push(next.to_string());
        current = next;
    };

    tracing::debug!(len = path.len(), ?end, "random walk finished");
    Ok(Walk { path, end })
}
