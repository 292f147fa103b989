// src/cli/dispatch.rs
//! Logging setup and routing of parsed subcommands to session handlers.

use super::{
    args::{Cli, Commands},
    handlers::{load_config, Session},
};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber. `RUST_LOG` wins over the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the document and executes the parsed command against it.
///
/// # Errors
/// Returns error if loading, the command handler, or saving results fails.
pub fn execute(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let mut session = Session::open(&cli.file, config, cli.json)?;
    run_command(&mut session, cli.command)?;
    session.finish(cli.save.as_deref())
}

fn run_command(session: &mut Session, command: Commands) -> Result<()> {
    match command {
        Commands::Show { dot } => session.handle_show(dot.as_deref()),
        Commands::Bridge { first, second } => session.handle_bridge(&first, &second),
        Commands::Generate { text, seed } => session.handle_generate(&text.join(" "), seed),
        Commands::Path {
            start,
            end,
            all,
            dot,
        } => session.handle_path(&start, end.as_deref(), all, dot.as_deref()),
        Commands::Rank { word, top, damping } => {
            session.handle_rank(word.as_deref(), top, damping)
        }
        Commands::Walk {
            seed,
            max_steps,
            dot,
        } => session.handle_walk(seed, max_steps, dot.as_deref()),
    }
}
