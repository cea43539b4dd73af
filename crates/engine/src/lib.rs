//! # Fileman Engine
//!
//! Command execution engine for the fileman interactive file manager:
//! path resolution against session state, pre-flight validation of
//! filesystem preconditions, and streaming file operations that handle
//! arbitrarily large files in bounded memory and clean up partial
//! results on failure.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      Engine                         │
//! │  (one method per command, owns the Session)         │
//! ├─────────────────────────────────────────────────────┤
//! │                                                     │
//! │  ┌───────────┐  ┌──────────────┐  ┌─────────────┐  │
//! │  │   path    │  │   validate   │  │    files    │  │
//! │  │ (resolve) │  │ (pre-flight) │  │ (streaming) │  │
//! │  └───────────┘  └──────────────┘  └─────────────┘  │
//! │                                                     │
//! │  ┌───────────┐  ┌──────────────┐                   │
//! │  │  session  │  │     host     │                   │
//! │  └───────────┘  └──────────────┘                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The REPL front end parses a line into a [`Command`] and hands it to
//! [`Engine::dispatch`]; the engine returns an [`Outcome`] or a
//! classified [`EngineError`] and never prints anything itself.
//!
//! ## Example
//!
//! ```no_run
//! use engine::{Command, Engine, Outcome};
//!
//! let mut engine = Engine::new(Some("alice".to_string()));
//! let command = Command::from_parts("ls", &[])?;
//!
//! let mut sink = std::io::stdout();
//! match engine.dispatch(command, &mut sink)? {
//!     Outcome::Listing(entries) => println!("{} entries", entries.len()),
//!     _ => {}
//! }
//! # Ok::<(), engine::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - [`command`]: the enumerated command surface
//! - [`engine`]: the per-command execution methods
//! - [`error`]: input/validation/operation error taxonomy
//! - [`files`]: listing, streaming transfers, Brotli compression
//! - [`host`]: host introspection queries
//! - [`path`]: lexical path resolution
//! - [`session`]: current directory and username state
//! - [`validate`]: pre-flight filesystem checks

pub mod command;
pub mod engine;
pub mod error;
pub mod files;
pub mod host;
pub mod path;
pub mod session;
pub mod validate;

pub use command::Command;
pub use engine::{Engine, Outcome};
pub use error::{EngineError, OperationError, ValidationError};
pub use files::{DirEntry, EntryKind};
pub use host::{CpuInfo, HostQuery, HostReport, HOST_EOL};
pub use session::{Session, ANONYMOUS_USERNAME};
