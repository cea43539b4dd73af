//! The command engine.
//!
//! One engine instance owns the [`Session`] for the whole run and
//! exposes one method per command. Every method follows the same
//! shape: resolve paths against the session, run the pre-flight
//! checks, then perform the operation — so a validation failure is
//! always a no-op, and an execution failure always cleans up after
//! itself. Commands run to a terminal outcome before the next one is
//! accepted; the engine holds no cross-command state besides the
//! session.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::error::{EngineError, OperationError, ValidationError};
use crate::files::{self, DirEntry};
use crate::host::{self, HostQuery, HostReport};
use crate::path;
use crate::session::Session;
use crate::validate;

/// Renderable result of a dispatched command.
#[derive(Debug)]
pub enum Outcome {
    /// The command completed with nothing to display.
    Done,
    /// Directory listing for `ls`.
    Listing(Vec<DirEntry>),
    /// Hex digest for `hash`.
    Digest(String),
    /// Host information for `os`.
    Host(HostReport),
    /// The user asked to end the session.
    Exit,
}

/// Command execution engine bound to one session.
pub struct Engine {
    session: Session,
}

impl Engine {
    /// Create an engine with a session rooted at the home directory.
    pub fn new(username: Option<String>) -> Self {
        Self {
            session: Session::new(username),
        }
    }

    /// Create an engine around an existing session.
    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// The engine's session (read-only view for prompts and greetings).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute a parsed command, streaming any `cat` output into `sink`.
    pub fn dispatch(
        &mut self,
        command: Command,
        sink: &mut dyn Write,
    ) -> Result<Outcome, EngineError> {
        match command {
            Command::Up => {
                self.up();
                Ok(Outcome::Done)
            }
            Command::Cd { target } => self.cd(&target).map(|_| Outcome::Done),
            Command::Ls => self.ls().map(Outcome::Listing),
            Command::Cat { path } => self.cat(&path, sink).map(|_| Outcome::Done),
            Command::Add { name } => self.add(&name).map(|_| Outcome::Done),
            Command::Rn { path, new_name } => self.rn(&path, &new_name).map(|_| Outcome::Done),
            Command::Cp { path, dest_dir } => self.cp(&path, &dest_dir).map(|_| Outcome::Done),
            Command::Mv { path, dest_dir } => self.mv(&path, &dest_dir).map(|_| Outcome::Done),
            Command::Rm { path } => self.rm(&path).map(|_| Outcome::Done),
            Command::Os { query } => Ok(Outcome::Host(self.host(query))),
            Command::Hash { path } => self.hash(&path).map(Outcome::Digest),
            Command::Compress { path, dest } => {
                self.compress(&path, &dest).map(|_| Outcome::Done)
            }
            Command::Decompress { path, dest } => {
                self.decompress(&path, &dest).map(|_| Outcome::Done)
            }
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// `up` — move to the parent directory (no-op at the root).
    pub fn up(&mut self) {
        self.session.up();
    }

    /// `cd` — navigate to a directory.
    ///
    /// An absolute target on a different root fails with
    /// `CrossRootNavigation`; the session never leaves the root volume
    /// it started on. The current directory is only replaced after the
    /// target passed the directory check.
    pub fn cd(&mut self, target: &str) -> Result<(), EngineError> {
        let raw = require_path(target)?;

        if raw.is_absolute() && !path::same_root(raw, self.session.current_dir()) {
            return Err(ValidationError::CrossRootNavigation.into());
        }

        let resolved = path::resolve(raw, self.session.current_dir());
        validate::ensure_directory(&resolved)?;

        self.session.set_current_dir(resolved);
        Ok(())
    }

    /// `ls` — list the current directory, directories first.
    pub fn ls(&self) -> Result<Vec<DirEntry>, EngineError> {
        files::list_directory(self.session.current_dir())
    }

    /// `cat` — stream a file's contents into `sink`.
    pub fn cat(&self, target: &str, sink: &mut dyn Write) -> Result<(), EngineError> {
        let src = self.resolve(target)?;
        validate::ensure_file(&src)?;

        files::read_to(&src, sink)?;
        Ok(())
    }

    /// `add` — create an empty file in the current directory.
    pub fn add(&self, name: &str) -> Result<(), EngineError> {
        require_path(name)?;
        validate::ensure_valid_name(name)?;

        let target = self.session.current_dir().join(name);
        validate::ensure_absent(&target)?;

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(OperationError::CreateFailure)?;
        Ok(())
    }

    /// `rn` — rename a file within its directory.
    ///
    /// Reduces to one atomic rename call, so either the original name
    /// still exists (on failure) or only the new one does.
    pub fn rn(&self, target: &str, new_name: &str) -> Result<(), EngineError> {
        let src = self.resolve(target)?;
        validate::ensure_file(&src)?;
        validate::ensure_valid_name(new_name)?;

        let parent = src.parent().unwrap_or_else(|| Path::new("/"));
        let dest = parent.join(new_name);
        validate::ensure_absent(&dest)?;

        fs::rename(&src, &dest).map_err(OperationError::RenameFailure)?;
        Ok(())
    }

    /// `cp` — copy a file into a destination directory.
    ///
    /// Returns the path of the new copy.
    pub fn cp(&self, target: &str, dest_dir: &str) -> Result<PathBuf, EngineError> {
        let src = self.resolve(target)?;
        let dest = self.resolve(dest_dir)?;

        validate::ensure_file(&src)?;
        validate::ensure_directory(&dest)?;

        if src.parent() == Some(dest.as_path()) {
            return Err(ValidationError::SameSourceAndDestination.into());
        }

        let file_name = src
            .file_name()
            .ok_or_else(|| EngineError::Input(format!("not a file path: {target}")))?;
        let copy_path = dest.join(file_name);
        validate::ensure_absent(&copy_path)?;

        files::copy_file(&src, &copy_path)?;
        Ok(copy_path)
    }

    /// `mv` — copy into the destination directory, then delete the
    /// source.
    ///
    /// If the copy fails the source is untouched. If only the delete
    /// fails, the copy remains — an intentional duplicate instead of
    /// silent data loss — and the failure is reported.
    pub fn mv(&self, target: &str, dest_dir: &str) -> Result<PathBuf, EngineError> {
        let copy_path = self.cp(target, dest_dir)?;

        let src = self.resolve(target)?;
        fs::remove_file(&src).map_err(OperationError::DeleteFailure)?;
        Ok(copy_path)
    }

    /// `rm` — delete a file.
    pub fn rm(&self, target: &str) -> Result<(), EngineError> {
        let src = self.resolve(target)?;
        validate::ensure_file(&src)?;

        fs::remove_file(&src).map_err(OperationError::DeleteFailure)?;
        Ok(())
    }

    /// `os` — answer a host introspection query.
    pub fn host(&self, query: HostQuery) -> HostReport {
        host::report(query)
    }

    /// `hash` — SHA-256 digest of a file, lowercase hex.
    pub fn hash(&self, target: &str) -> Result<String, EngineError> {
        let src = self.resolve(target)?;
        validate::ensure_file(&src)?;

        Ok(files::hash_file(&src)?)
    }

    /// `compress` — Brotli-encode a file, deleting the source on
    /// success.
    pub fn compress(&self, target: &str, dest: &str) -> Result<(), EngineError> {
        let (src, dest) = self.prepare_transform(target, dest)?;
        files::compress_file(&src, &dest)?;
        Ok(())
    }

    /// `decompress` — Brotli-decode a file, deleting the source on
    /// success.
    pub fn decompress(&self, target: &str, dest: &str) -> Result<(), EngineError> {
        let (src, dest) = self.prepare_transform(target, dest)?;
        files::decompress_file(&src, &dest)?;
        Ok(())
    }

    /// Shared pre-flight for compress/decompress: source file, then
    /// destination parent directory, then destination collision.
    fn prepare_transform(
        &self,
        target: &str,
        dest: &str,
    ) -> Result<(PathBuf, PathBuf), EngineError> {
        let src = self.resolve(target)?;
        let dest = self.resolve(dest)?;

        validate::ensure_file(&src)?;

        let parent = dest
            .parent()
            .ok_or_else(|| EngineError::Input(format!("destination has no parent: {}", dest.display())))?;
        validate::ensure_directory(parent)?;
        validate::ensure_absent(&dest)?;

        Ok((src, dest))
    }

    /// Resolve a user-supplied path against the current directory.
    fn resolve(&self, target: &str) -> Result<PathBuf, EngineError> {
        let raw = require_path(target)?;
        Ok(path::resolve(raw, self.session.current_dir()))
    }
}

/// Reject empty path arguments before any filesystem access.
fn require_path(target: &str) -> Result<&Path, EngineError> {
    if target.is_empty() {
        Err(EngineError::Input("empty path argument".to_string()))
    } else {
        Ok(Path::new(target))
    }
}
