//! Command line argument parsing for the gencorpus utility.

use std::path::PathBuf;

use clap::Parser;

use fixture_gen::{GenConfig, NamePattern, CORPUS_UNIT_BYTES};

/// Compression-corpus fixture generator
///
/// gencorpus fills an existing directory with `test_<N>.txt` files. Sizes
/// are drawn in 64 KiB blocks, so the defaults (1 to 512 blocks) produce
/// files between 64 KiB and 32 MiB. Byte values are drawn from 32..=128,
/// giving mostly printable content.
#[derive(Debug, Parser)]
#[command(
    name = "gencorpus",
    version = "0.1.1",
    about = "Fill a directory with random compression-test files",
    long_about = "gencorpus fills an existing directory with test_<N>.txt files. Sizes \
                 are drawn in 64 KiB blocks, so the defaults (1 to 512 blocks) produce \
                 files between 64 KiB and 32 MiB. Byte values are drawn from 32..=128, \
                 giving mostly printable content."
)]
pub struct GenCorpusOpts {
    /// Directory to fill (must already exist)
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Number of files to generate
    #[arg(short = 'n', long = "count", value_name = "NUM", default_value_t = 32)]
    count: u32,

    /// Minimum file size in 64 KiB blocks
    #[arg(long = "min-blocks", value_name = "NUM", default_value_t = 1)]
    min_blocks: u64,

    /// Maximum file size in 64 KiB blocks (inclusive)
    #[arg(long = "max-blocks", value_name = "NUM", default_value_t = 512)]
    max_blocks: u64,
}

impl GenCorpusOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the generation configuration from the parsed options
    pub fn config(&self) -> GenConfig {
        GenConfig {
            count: self.count,
            min_units: self.min_blocks,
            max_units: self.max_blocks,
            unit_bytes: CORPUS_UNIT_BYTES,
            out_dir: self.dir.clone(),
            naming: NamePattern::NumberedTest,
            byte_min: 32,
            byte_max: 128,
            create_dir: false,
        }
    }
}
