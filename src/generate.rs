//! Writing a single fixture file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};

/// Chunk size for filling a file with sampled bytes.
const WRITE_CHUNK: usize = 64 * 1024;

/// Writes `size_bytes` bytes to `path`, each sampled uniformly with
/// replacement from `alphabet`.
///
/// The file is opened with exclusive create; an existing file at `path`
/// is an error, never overwritten. A failure mid-write leaves the
/// partially written file in place.
pub fn write_random_file<R: Rng>(
    rng: &mut R,
    path: &Path,
    size_bytes: u64,
    alphabet: &[u8],
) -> Result<()> {
    debug_assert!(!alphabet.is_empty());

    let file = File::create_new(path).map_err(|source| Error::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let mut chunk = vec![0u8; WRITE_CHUNK.min(size_bytes as usize)];
    let mut remaining = size_bytes;
    while remaining > 0 {
        let n = remaining.min(chunk.len() as u64) as usize;
        for byte in &mut chunk[..n] {
            *byte = alphabet[rng.random_range(0..alphabet.len())];
        }
        out.write_all(&chunk[..n]).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        remaining -= n as u64;
    }

    out.flush().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
