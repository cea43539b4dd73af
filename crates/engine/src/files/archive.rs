//! Brotli compress/decompress, in place.
//!
//! Both operations are transforms, not copies: on success the source
//! file is deleted and only the transformed artifact remains. On any
//! failure in the read/transform/write chain the source is left intact
//! and the partial destination is removed — an invalid half-written
//! archive is worse than no archive.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use brotli::enc::BrotliEncoderParams;

use crate::error::OperationError;
use crate::files::stream::remove_partial;

/// Compress `src` into the new file `dest`, then delete `src`.
pub fn compress_file(src: &Path, dest: &Path) -> Result<(), OperationError> {
    let mut reader = File::open(src).map_err(OperationError::CompressFailure)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(OperationError::CompressFailure)?;

    let params = BrotliEncoderParams::default();
    let result = brotli::BrotliCompress(&mut reader, &mut writer, &params)
        .and_then(|_| writer.flush());

    drop(writer);

    if let Err(e) = result {
        remove_partial(dest);
        return Err(OperationError::CompressFailure(e));
    }

    fs::remove_file(src).map_err(OperationError::DeleteFailure)
}

/// Decompress `src` into the new file `dest`, then delete `src`.
pub fn decompress_file(src: &Path, dest: &Path) -> Result<(), OperationError> {
    let mut reader = File::open(src).map_err(OperationError::DecompressFailure)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(OperationError::DecompressFailure)?;

    let result =
        brotli::BrotliDecompress(&mut reader, &mut writer).and_then(|_| writer.flush());

    drop(writer);

    if let Err(e) = result {
        remove_partial(dest);
        return Err(OperationError::DecompressFailure(e));
    }

    fs::remove_file(src).map_err(OperationError::DeleteFailure)
}
