//! Command line argument parsing for the genfiles utility.

use std::path::PathBuf;

use clap::Parser;

use fixture_gen::{GenConfig, NamePattern, DEFAULT_UNIT_BYTES};

/// Random fixture file generator
///
/// genfiles writes a batch of files filled with random bytes drawn from a
/// small per-file alphabet. Each file's size is drawn uniformly from the
/// given kilobyte range. The output directory is created and must not
/// already exist.
#[derive(Debug, Parser)]
#[command(
    name = "genfiles",
    version = "0.1.1",
    about = "Generate random fixture files",
    long_about = "genfiles writes a batch of files filled with random bytes drawn from a \
                 small per-file alphabet. Each file's size is drawn uniformly from the \
                 given kilobyte range. The output directory is created and must not \
                 already exist."
)]
pub struct GenFilesOpts {
    /// Number of files to generate
    #[arg(short = 'n', long = "count", value_name = "NUM")]
    count: u32,

    /// Minimum file size in kilobytes
    #[arg(long = "min-kb", value_name = "KB")]
    min_kb: u64,

    /// Maximum file size in kilobytes (inclusive)
    #[arg(long = "max-kb", value_name = "KB")]
    max_kb: u64,

    /// Output directory (created; must not already exist)
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    out_dir: PathBuf,
}

impl GenFilesOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the generation configuration from the parsed options
    pub fn config(&self) -> GenConfig {
        GenConfig {
            count: self.count,
            min_units: self.min_kb,
            max_units: self.max_kb,
            unit_bytes: DEFAULT_UNIT_BYTES,
            out_dir: self.out_dir.clone(),
            naming: NamePattern::PaddedFile,
            byte_min: 0,
            byte_max: 127,
            create_dir: true,
        }
    }
}
