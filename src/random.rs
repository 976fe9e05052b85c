//! Per-file random draws.
//!
//! Everything here is generic over [`rand::Rng`] so callers can pass the
//! thread RNG in production and a seeded `StdRng` in tests to get exact,
//! reproducible byte sequences.

use rand::Rng;

use crate::config::{ALPHABET_BLOCK, ALPHABET_BLOCKS_MAX, ALPHABET_BLOCKS_MIN};

/// Draws the byte alphabet for one file.
///
/// The length is `8 × k` with `k` drawn uniformly from `8..=16`, so every
/// alphabet has between 64 and 128 entries. Entries are drawn
/// independently and uniformly from `byte_min..=byte_max`; duplicates are
/// allowed and skew the sampling distribution on purpose.
pub fn draw_alphabet<R: Rng>(rng: &mut R, byte_min: u8, byte_max: u8) -> Vec<u8> {
    let blocks = rng.random_range(ALPHABET_BLOCKS_MIN..=ALPHABET_BLOCKS_MAX);
    (0..ALPHABET_BLOCK * blocks)
        .map(|_| rng.random_range(byte_min..=byte_max))
        .collect()
}

/// Draws the file size in units, uniformly from the inclusive range.
pub fn draw_size_units<R: Rng>(rng: &mut R, min_units: u64, max_units: u64) -> u64 {
    rng.random_range(min_units..=max_units)
}
