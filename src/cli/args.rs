use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Word-adjacency graph analyzer")]
pub struct Cli {
    /// Text file to build the graph from
    #[arg(long, short, value_name = "FILE")]
    pub file: PathBuf,
    /// Config file (defaults to ./wordgraph.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Also write the printed results to this file
    #[arg(long, value_name = "FILE", global = true)]
    pub save: Option<PathBuf>,
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Enable debug logging
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the graph structure
    Show {
        /// Write a Graphviz rendering of the graph
        #[arg(long, value_name = "FILE")]
        dot: Option<PathBuf>,
    },
    /// Find bridge words between two words
    Bridge { first: String, second: String },
    /// Insert bridge words into new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shortest path from START to END, or to every reachable word
    Path {
        start: String,
        end: Option<String>,
        /// List every equal-length shortest path
        #[arg(long, requires = "end")]
        all: bool,
        /// Write a Graphviz rendering with the path highlighted
        #[arg(long, value_name = "FILE", requires = "end")]
        dot: Option<PathBuf>,
    },
    /// PageRank of a word, or the top-ranked words
    Rank {
        word: Option<String>,
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        damping: Option<f64>,
    },
    /// Random walk through the graph
    Walk {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        max_steps: Option<usize>,
        /// Write a Graphviz rendering with the walk highlighted
        #[arg(long, value_name = "FILE")]
        dot: Option<PathBuf>,
    },
}
