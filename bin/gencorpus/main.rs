//! Compression-corpus fixture generator
//!
//! Fills an existing directory with `test_<N>.txt` files sized in 64 KiB
//! blocks, with contents sampled from a small per-file random alphabet of
//! mostly printable bytes.

use std::process;

mod opts;

use opts::GenCorpusOpts;

use fixture_gen::run;

const PROGRAM_NAME: &str = "gencorpus";

fn main() {
    let opts = GenCorpusOpts::parse();
    let config = opts.config();

    if let Err(err) = run(&config) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }
}
