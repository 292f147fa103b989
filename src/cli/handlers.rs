// src/cli/handlers.rs
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::config::Config;
use crate::error::GraphError;
use crate::graph::rank::round4;
use crate::graph::{bridge, path, walk, FnWalkControl, RankEngine, WordGraph};
use crate::io;
use crate::render;
use crate::reporting::{self, Tone, Transcript};
use crate::text::normalize_word;

/// A loaded document plus everything needed to answer queries about it.
pub struct Session {
    graph: WordGraph,
    config: Config,
    transcript: Transcript,
    json: bool,
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl Session {
    /// Loads `file` and builds its graph.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn open(file: &Path, config: Config, json: bool) -> Result<Self> {
        let graph = io::load_graph(file)
            .with_context(|| format!("Failed to load {}", file.display()))?;
        Ok(Self::with_graph(graph, config, json, Transcript::new()))
    }

    #[must_use]
    pub fn with_graph(graph: WordGraph, config: Config, json: bool, transcript: Transcript) -> Self {
        Self {
            graph,
            config,
            transcript,
            json,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn emit_json(&mut self, value: &serde_json::Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.transcript.plain(text);
        Ok(())
    }

    fn emit_lines(&mut self, tone: Tone, lines: Vec<String>) {
        for line in lines {
            self.transcript.line(tone, line);
        }
    }

    /// Reports a failed query, or propagates errors that are not query outcomes.
    fn report_err(&mut self, err: GraphError) -> Result<()> {
        match err {
            GraphError::Io { .. } | GraphError::Config(_) => Err(err.into()),
            other if self.json => self.emit_json(&json!({ "error": other.to_string() })),
            other => {
                self.transcript.failure(&other);
                Ok(())
            }
        }
    }

    /// Handles the show command.
    ///
    /// # Errors
    /// Returns error if the DOT file cannot be written.
    pub fn handle_show(&mut self, dot: Option<&Path>) -> Result<()> {
        if self.json {
            let value = serde_json::to_value(&self.graph)?;
            self.emit_json(&value)?;
        } else {
            self.emit_lines(Tone::Plain, reporting::structure_lines(&self.graph));
        }
        if let Some(dot) = dot {
            io::save_report(dot, &render::to_dot(&self.graph))?;
            tracing::info!(path = %dot.display(), "graph rendering written");
        }
        Ok(())
    }

    /// Handles the bridge command.
    ///
    /// # Errors
    /// Only fails on output errors; query misses are reported, not returned.
    pub fn handle_bridge(&mut self, first: &str, second: &str) -> Result<()> {
        match bridge::bridge_words(&self.graph, first, second) {
            Ok(bridges) if self.json => self.emit_json(&json!({ "bridges": bridges })),
            Ok(bridges) => {
                let msg = reporting::bridge_message(
                    &normalize_word(first),
                    &normalize_word(second),
                    &bridges,
                );
                self.transcript.line(Tone::Success, msg);
                Ok(())
            }
            Err(e) => self.report_err(e),
        }
    }

    /// Handles the generate command.
    ///
    /// # Errors
    /// Only fails on output errors.
    pub fn handle_generate(&mut self, text: &str, seed: Option<u64>) -> Result<()> {
        let mut rng = make_rng(seed.or(self.config.walk.seed));
        let generated = bridge::generate_text(&self.graph, text, &mut rng);
        if self.json {
            return self.emit_json(&json!({ "input": text, "generated": generated }));
        }
        self.transcript.line(Tone::Heading, "Generated text:");
        self.transcript.plain(generated);
        Ok(())
    }

    /// Handles the path command.
    ///
    /// # Errors
    /// Returns error if output or the DOT file cannot be written.
    pub fn handle_path(
        &mut self,
        start: &str,
        end: Option<&str>,
        all: bool,
        dot: Option<&Path>,
    ) -> Result<()> {
        let Some(end) = end else {
            return match path::shortest_paths_from(&self.graph, start) {
                Ok(routes) if self.json => self.emit_json(&json!({ "routes": routes })),
                Ok(routes) => {
                    let lines = reporting::routes_lines(&normalize_word(start), &routes);
                    self.emit_lines(Tone::Plain, lines);
                    Ok(())
                }
                Err(e) => self.report_err(e),
            };
        };

        if all {
            return match path::all_shortest_paths(&self.graph, start, end) {
                Ok((cost, paths)) => {
                    if self.json {
                        self.emit_json(&json!({ "cost": cost, "paths": paths }))?;
                    } else {
                        let lines = reporting::all_route_lines(
                            &normalize_word(start),
                            &normalize_word(end),
                            cost,
                            &paths,
                        );
                        self.emit_lines(Tone::Plain, lines);
                    }
                    if let (Some(dot), Some(first)) = (dot, paths.first()) {
                        self.write_highlight(dot, first)?;
                    }
                    Ok(())
                }
                Err(e) => self.report_err(e),
            };
        }

        match path::shortest_path(&self.graph, start, end) {
            Ok(route) => {
                if self.json {
                    self.emit_json(&serde_json::to_value(&route)?)?;
                } else {
                    let lines =
                        reporting::route_lines(&normalize_word(start), &normalize_word(end), &route);
                    self.emit_lines(Tone::Plain, lines);
                }
                if let Some(dot) = dot {
                    self.write_highlight(dot, &route.path)?;
                }
                Ok(())
            }
            Err(e) => self.report_err(e),
        }
    }

    /// Handles the rank command.
    ///
    /// # Errors
    /// Returns error if the damping override is out of range.
    pub fn handle_rank(
        &mut self,
        word: Option<&str>,
        top: Option<usize>,
        damping: Option<f64>,
    ) -> Result<()> {
        let mut params = self.config.rank.clone();
        if let Some(d) = damping {
            params.damping = d;
        }
        params.validate()?;

        if let Some(word) = word {
            let value = RankEngine::page_rank(&self.graph, word, &params);
            let word = normalize_word(word);
            if self.json {
                return self.emit_json(&json!({ "word": word, "pagerank": value }));
            }
            self.transcript
                .plain(format!("PageRank of \"{word}\": {value:.4}"));
            return Ok(());
        }

        let ranked = RankEngine::ranked(&self.graph, &params);
        let limit = top.unwrap_or(self.config.output.top);
        if self.json {
            let top: Vec<_> = ranked
                .iter()
                .take(limit)
                .map(|(w, r)| json!({ "word": w, "pagerank": round4(*r) }))
                .collect();
            return self.emit_json(&json!({ "ranked": top }));
        }
        self.transcript
            .line(Tone::Heading, format!("Top {} words by PageRank:", limit.min(ranked.len())));
        self.emit_lines(Tone::Plain, reporting::rank_lines(&ranked, limit));
        Ok(())
    }

    /// Handles the walk command.
    ///
    /// # Errors
    /// Returns error if the step limit is zero, or if output or the DOT file
    /// cannot be written. A failed walk-log append is logged and otherwise ignored.
    pub fn handle_walk(
        &mut self,
        seed: Option<u64>,
        max_steps: Option<usize>,
        dot: Option<&Path>,
    ) -> Result<()> {
        let mut rng = make_rng(seed.or(self.config.walk.seed));
        let limit = max_steps.or(self.config.walk.max_steps);
        if limit == Some(0) {
            return Err(GraphError::Config("walk.max_steps must be at least 1".into()).into());
        }
        let mut control = FnWalkControl {
            stop: |p: &[String]| limit.is_some_and(|max| p.len() >= max),
            progress: |p: &[String]| tracing::debug!(len = p.len(), "walking"),
        };

        let result = match walk::random_walk(&self.graph, &mut rng, &mut control) {
            Ok(w) => w,
            Err(e) => return self.report_err(e),
        };

        if let Err(e) = io::append_walk(&self.config.walk.output, &result.path) {
            tracing::warn!(error = %e, "failed to persist random walk");
        }

        if self.json {
            self.emit_json(&serde_json::to_value(&result)?)?;
        } else {
            self.transcript
                .line(Tone::Success, reporting::walk_message(&result));
        }
        if let Some(dot) = dot {
            self.write_highlight(dot, &result.path)?;
        }
        Ok(())
    }

    fn write_highlight(&self, dot: &Path, route: &[String]) -> Result<()> {
        io::save_report(dot, &render::to_dot_highlighted(&self.graph, route))?;
        tracing::info!(path = %dot.display(), "highlighted rendering written");
        Ok(())
    }

    /// Writes the transcript to `save`, if given.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn finish(self, save: Option<&Path>) -> Result<()> {
        if let Some(save) = save {
            io::save_report(save, &self.transcript.render())?;
            tracing::info!(path = %save.display(), "results saved");
        }
        Ok(())
    }
}

/// Loads the config named on the command line, or the default lookup.
///
/// # Errors
/// Returns error if the config file is unreadable or invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p)?,
        None => Config::load()?,
    };
    Ok(config)
}
