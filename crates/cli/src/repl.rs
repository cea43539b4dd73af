//! The read-eval-print loop.
//!
//! Reads a line, splits it into a command name and arguments, hands
//! the pair to the engine, and renders the result. Errors never end
//! the session; only `.exit`, end-of-input, or Ctrl-C do.

use engine::{Command, Engine, Outcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// Run the REPL until the user exits.
///
/// Ctrl-C is caught while waiting for input so the farewell still
/// prints; a command already executing runs to its terminal outcome
/// first (commands are never half-applied).
pub async fn run(engine: &mut Engine) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        render::prompt(engine.session().current_dir());

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break,
        };

        // None means stdin closed (piped input ran out).
        let Some(line) = line else { break };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let command = match Command::from_parts(name, &args) {
            Ok(command) => command,
            Err(err) => {
                render::error(&err);
                continue;
            }
        };

        tracing::debug!(?command, "Dispatching");

        // `cat` streams straight to stdout as chunks arrive.
        let mut stdout = std::io::stdout();
        match engine.dispatch(command, &mut stdout) {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => render::outcome(&outcome),
            Err(err) => {
                tracing::debug!(error = %err, "Command failed");
                render::error(&err);
            }
        }
    }

    Ok(())
}
