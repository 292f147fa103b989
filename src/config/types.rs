use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `PageRank` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tol")]
    pub tol: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iter: default_max_iter(),
            tol: default_tol(),
        }
    }
}

fn default_damping() -> f64 { 0.85 }
fn default_max_iter() -> usize { 100 }
fn default_tol() -> f64 { 1e-6 }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// File each finished walk is appended to.
    #[serde(default = "default_walk_output")]
    pub output: PathBuf,
    /// Upper bound on walk length, in nodes. `None` walks until the walk ends itself.
    #[serde(default)]
    pub max_steps: Option<usize>,
    /// Fixed seed for reproducible walks and text generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            output: default_walk_output(),
            max_steps: None,
            seed: None,
        }
    }
}

fn default_walk_output() -> PathBuf { PathBuf::from("random_walk.txt") }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// How many words the rank listing shows.
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            top: default_top(),
        }
    }
}

fn default_color() -> bool { true }
fn default_top() -> usize { 20 }

/// Contents of `wordgraph.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
