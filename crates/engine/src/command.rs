//! The typed command surface.
//!
//! The REPL hands over an already-split `(name, args)` pair; this
//! module turns it into an enumerated [`Command`] through a fixed
//! match, checking arity up front so every later stage works with a
//! well-formed request. Unknown names and wrong argument counts are
//! input errors — nothing downstream ever sees them.

use crate::error::EngineError;
use crate::host::HostQuery;

/// A fully parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the current directory to its parent.
    Up,
    /// Navigate to a directory.
    Cd { target: String },
    /// List the current directory.
    Ls,
    /// Stream a file's contents to the output.
    Cat { path: String },
    /// Create an empty file in the current directory.
    Add { name: String },
    /// Rename a file in place.
    Rn { path: String, new_name: String },
    /// Copy a file into a destination directory.
    Cp { path: String, dest_dir: String },
    /// Move a file into a destination directory.
    Mv { path: String, dest_dir: String },
    /// Delete a file.
    Rm { path: String },
    /// Report host information.
    Os { query: HostQuery },
    /// Print a file's SHA-256 digest.
    Hash { path: String },
    /// Brotli-compress a file (deletes the source on success).
    Compress { path: String, dest: String },
    /// Brotli-decompress a file (deletes the source on success).
    Decompress { path: String, dest: String },
    /// End the session.
    Exit,
}

impl Command {
    /// Build a command from a name and its already-split arguments.
    pub fn from_parts(name: &str, args: &[&str]) -> Result<Self, EngineError> {
        match name {
            "up" => {
                no_args(name, args)?;
                Ok(Command::Up)
            }
            "cd" => Ok(Command::Cd {
                target: one_arg(name, args)?,
            }),
            "ls" => {
                no_args(name, args)?;
                Ok(Command::Ls)
            }
            "cat" => Ok(Command::Cat {
                path: one_arg(name, args)?,
            }),
            "add" => Ok(Command::Add {
                name: one_arg(name, args)?,
            }),
            "rn" => {
                let (path, new_name) = two_args(name, args)?;
                Ok(Command::Rn { path, new_name })
            }
            "cp" => {
                let (path, dest_dir) = two_args(name, args)?;
                Ok(Command::Cp { path, dest_dir })
            }
            "mv" => {
                let (path, dest_dir) = two_args(name, args)?;
                Ok(Command::Mv { path, dest_dir })
            }
            "rm" => Ok(Command::Rm {
                path: one_arg(name, args)?,
            }),
            "os" => {
                let flag = one_arg(name, args)?;
                Ok(Command::Os {
                    query: HostQuery::parse(&flag)?,
                })
            }
            "hash" => Ok(Command::Hash {
                path: one_arg(name, args)?,
            }),
            "compress" => {
                let (path, dest) = two_args(name, args)?;
                Ok(Command::Compress { path, dest })
            }
            "decompress" => {
                let (path, dest) = two_args(name, args)?;
                Ok(Command::Decompress { path, dest })
            }
            ".exit" => {
                no_args(name, args)?;
                Ok(Command::Exit)
            }
            other => Err(EngineError::Input(format!("unknown command: {other}"))),
        }
    }
}

fn no_args(name: &str, args: &[&str]) -> Result<(), EngineError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Input(format!(
            "{name} takes no arguments, got {}",
            args.len()
        )))
    }
}

fn one_arg(name: &str, args: &[&str]) -> Result<String, EngineError> {
    match args {
        [a] if !a.is_empty() => Ok((*a).to_string()),
        _ => Err(EngineError::Input(format!(
            "{name} expects exactly one argument"
        ))),
    }
}

fn two_args(name: &str, args: &[&str]) -> Result<(String, String), EngineError> {
    match args {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok(((*a).to_string(), (*b).to_string())),
        _ => Err(EngineError::Input(format!(
            "{name} expects exactly two arguments"
        ))),
    }
}
