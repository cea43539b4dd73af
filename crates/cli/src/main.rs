//! Fileman
//!
//! Interactive command-line file manager. This binary is the thin
//! front end: it parses the command line, sets up logging, renders
//! text, and loops over user input — all actual file work happens in
//! the `engine` crate.

use clap::Parser;
use engine::Engine;

mod render;
mod repl;

/// Fileman - interactive command-line file manager.
#[derive(Parser, Debug)]
#[command(name = "fileman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Username shown in the greeting and farewell
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // FILEMAN_LOG overrides --verbose, which overrides the quiet
    // default; logs go to stderr so they never garble the REPL.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        std::env::var("FILEMAN_LOG").unwrap_or_else(|_| default_filter.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut engine = Engine::new(cli.username);
    tracing::debug!(
        username = engine.session().username(),
        dir = %engine.session().current_dir().display(),
        "Session started"
    );

    render::greeting(engine.session().username());
    repl::run(&mut engine).await?;
    render::farewell(engine.session().username());

    Ok(())
}
