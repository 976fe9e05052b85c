//! Generation orchestration and progress reporting.

use std::fs;
use std::path::PathBuf;

use rand::Rng;

use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::format::format_size;
use crate::generate::write_random_file;
use crate::random::{draw_alphabet, draw_size_units};

/// Report record for one generated file, returned in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path the file was written to.
    pub path: PathBuf,
    /// Exact size written, in bytes.
    pub size_bytes: u64,
}

/// Runs one generation pass with the thread RNG.
///
/// See [`run_with_rng`] for the full contract.
pub fn run(config: &GenConfig) -> Result<Vec<GeneratedFile>> {
    run_with_rng(config, &mut rand::rng())
}

/// Runs one generation pass with the caller's RNG.
///
/// Parameters are validated up front; nothing is written when they are
/// rejected. For each file index the alphabet and size are drawn fresh,
/// the file is written, and one progress line (`<path>: <size>`) goes to
/// stdout. Files already written stay in place if a later one fails.
///
/// # Errors
///
/// Returns a parameter error for contradictory size or byte bounds, and
/// a filesystem error when the output directory cannot be created or a
/// file cannot be created or written.
pub fn run_with_rng<R: Rng>(config: &GenConfig, rng: &mut R) -> Result<Vec<GeneratedFile>> {
    if config.min_units > config.max_units {
        return Err(Error::InvalidSizeRange {
            min: config.min_units,
            max: config.max_units,
        });
    }
    if config.byte_min > config.byte_max {
        return Err(Error::InvalidByteRange {
            min: config.byte_min,
            max: config.byte_max,
        });
    }

    if config.create_dir {
        fs::create_dir(&config.out_dir).map_err(|source| Error::CreateDir {
            path: config.out_dir.clone(),
            source,
        })?;
    }

    let mut report = Vec::with_capacity(config.count as usize);
    for index in 0..config.count {
        let alphabet = draw_alphabet(rng, config.byte_min, config.byte_max);
        let size_bytes = draw_size_units(rng, config.min_units, config.max_units) * config.unit_bytes;
        let path = config.out_dir.join(config.naming.file_name(index));

        write_random_file(rng, &path, size_bytes, &alphabet)?;

        println!("{}: {}", path.display(), format_size(size_bytes));
        report.push(GeneratedFile { path, size_bytes });
    }

    Ok(report)
}
