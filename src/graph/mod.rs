// src/graph/mod.rs
//! The word graph and the read-only engines that query it.

pub mod bridge;
pub mod path;
pub mod rank;
pub mod store;
pub mod walk;

pub use path::Route;
pub use rank::RankEngine;
pub use store::{Successors, WordGraph};
pub use walk::{FnWalkControl, StepLimit, Unbounded, Walk, WalkControl, WalkEnd};
