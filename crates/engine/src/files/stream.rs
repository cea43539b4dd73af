//! Streaming byte-moving operations.
//!
//! Everything here processes files of unbounded size in fixed-size
//! chunks, and guarantees a consistent filesystem on failure: a
//! destination file is either written to completion or removed, never
//! left as a silently truncated artifact.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::OperationError;

/// Chunk size for streaming transfers (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Copy `reader` to `writer` in fixed-size chunks.
///
/// Returns the number of bytes moved. The writer is flushed before
/// returning so a success here means the bytes left the buffer.
pub(crate) fn pump<R: Read, W: Write>(mut reader: R, mut writer: W) -> io::Result<u64> {
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
        total += bytes_read as u64;
    }

    writer.flush()?;
    Ok(total)
}

/// Best-effort removal of a partially written file.
///
/// The primary error is already on its way to the caller; a failure to
/// clean up can only be logged.
pub(crate) fn remove_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = ?path, error = %e, "Failed to remove partial file");
    }
}

/// Create `dest` and fill it from `reader`.
///
/// The destination is created with `create_new`, so an occupant that
/// appeared since validation fails the operation instead of being
/// clobbered. On any failure after creation the partial file is
/// removed.
pub(crate) fn write_file_from<R: Read>(reader: R, dest: &Path) -> io::Result<u64> {
    let file = OpenOptions::new().write(true).create_new(true).open(dest)?;

    match pump(reader, file) {
        Ok(total) => Ok(total),
        Err(e) => {
            remove_partial(dest);
            Err(e)
        }
    }
}

/// Stream a file's bytes into `sink` (the `cat` projection).
///
/// Chunks are forwarded as they arrive; on a mid-stream error the
/// output already emitted stays emitted — there is nothing to roll
/// back in a read-only projection.
pub fn read_to(src: &Path, sink: &mut dyn Write) -> Result<u64, OperationError> {
    let file = File::open(src).map_err(OperationError::ReadFailure)?;
    pump(file, sink).map_err(OperationError::ReadFailure)
}

/// Stream-copy `src` to the new file `dest`.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, OperationError> {
    let reader = File::open(src).map_err(OperationError::CopyFailure)?;
    write_file_from(reader, dest).map_err(OperationError::CopyFailure)
}

/// SHA-256 of a file's content as a lowercase hex string.
///
/// The digest is computed incrementally, so the result is independent
/// of chunk boundaries and the file never resides in memory whole.
pub fn hash_file(src: &Path) -> Result<String, OperationError> {
    let mut file = File::open(src).map_err(OperationError::ReadFailure)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(OperationError::ReadFailure)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
