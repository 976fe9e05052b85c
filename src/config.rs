//! Configuration types and constants for fixture generation.

use std::path::PathBuf;

/// Size unit for the parametric variant (sizes given in kilobytes).
pub const DEFAULT_UNIT_BYTES: u64 = 1024;

/// Size unit for the corpus variant (sizes given in 64 KiB blocks).
pub const CORPUS_UNIT_BYTES: u64 = 64 * 1024;

/// Alphabet length is always a multiple of this.
pub const ALPHABET_BLOCK: usize = 8;

/// Inclusive bounds for the per-file alphabet block count.
pub const ALPHABET_BLOCKS_MIN: usize = 8;
pub const ALPHABET_BLOCKS_MAX: usize = 16;

/// File naming scheme, one per generator variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    /// `file<NN>.txt`, index zero-padded to two digits.
    PaddedFile,
    /// `test_<N>.txt`, index unpadded.
    NumberedTest,
}

impl NamePattern {
    /// Renders the file name for the given index.
    pub fn file_name(self, index: u32) -> String {
        match self {
            NamePattern::PaddedFile => format!("file{index:02}.txt"),
            NamePattern::NumberedTest => format!("test_{index}.txt"),
        }
    }
}

/// Parameters for one generation run. Built once from command line
/// options and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of files to generate.
    pub count: u32,
    /// Minimum file size, in units of `unit_bytes`.
    pub min_units: u64,
    /// Maximum file size, in units of `unit_bytes` (inclusive).
    pub max_units: u64,
    /// Bytes per size unit.
    pub unit_bytes: u64,
    /// Directory the files are written into.
    pub out_dir: PathBuf,
    /// File naming scheme.
    pub naming: NamePattern,
    /// Smallest byte value eligible for the alphabet.
    pub byte_min: u8,
    /// Largest byte value eligible for the alphabet (inclusive).
    pub byte_max: u8,
    /// Create `out_dir` before writing (fails if it already exists).
    /// When false the directory must already exist.
    pub create_dir: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            count: 0,
            min_units: 1,
            max_units: 64,
            unit_bytes: DEFAULT_UNIT_BYTES,
            out_dir: PathBuf::new(),
            naming: NamePattern::PaddedFile,
            byte_min: 0,
            byte_max: 127,
            create_dir: true,
        }
    }
}
