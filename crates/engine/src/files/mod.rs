//! File operations: listing, streaming transfers, and compression.
//!
//! Every byte-moving operation in this module works in fixed-size
//! chunks and cleans up partial results on failure, so a command either
//! completes or leaves the filesystem as it found it (modulo the
//! read-only `cat` projection, which has nothing to roll back).

pub mod archive;
pub mod list;
pub mod stream;

pub use archive::{compress_file, decompress_file};
pub use list::{list_directory, DirEntry, EntryKind};
pub use stream::{copy_file, hash_file, read_to, CHUNK_SIZE};
