//! Random fixture file generator for compression test corpora.
//!
//! This crate writes batches of files of randomly drawn size, filled with
//! bytes sampled from a small per-file random alphabet. The files carry no
//! structure at all; they exist to feed compression and I/O test suites
//! that want many inputs of varying size and byte distribution.
//!
//! The library does the actual work; the `genfiles` and `gencorpus`
//! binaries are thin front-ends that map command line options onto a
//! [`GenConfig`] and call [`run`].

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod process;
pub mod random;

pub use config::{GenConfig, NamePattern, CORPUS_UNIT_BYTES, DEFAULT_UNIT_BYTES};
pub use error::{Error, Result};
pub use format::format_size;
pub use generate::write_random_file;
pub use process::{run, run_with_rng, GeneratedFile};
pub use random::{draw_alphabet, draw_size_units};
