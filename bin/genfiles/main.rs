//! Parametric random fixture generator
//!
//! Writes a batch of `file<NN>.txt` files of random size into a fresh
//! output directory, with contents sampled from a small per-file random
//! byte alphabet.

use std::process;

mod opts;

use opts::GenFilesOpts;

use fixture_gen::run;

const PROGRAM_NAME: &str = "genfiles";

fn main() {
    let opts = GenFilesOpts::parse();
    let config = opts.config();

    if let Err(err) = run(&config) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }
}
