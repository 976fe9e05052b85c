//! End-to-end generation tests against a real temp directory.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use fixture_gen::{
    draw_alphabet, run_with_rng, write_random_file, Error, GenConfig, NamePattern,
};

fn corpus_dir() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("testdir");
    (dir, out)
}

fn small_config(out_dir: PathBuf) -> GenConfig {
    GenConfig {
        count: 5,
        min_units: 1,
        max_units: 4,
        unit_bytes: 1024,
        out_dir,
        naming: NamePattern::PaddedFile,
        byte_min: 0,
        byte_max: 127,
        create_dir: true,
    }
}

/// Exactly `count` files appear, named by the pattern, in index order.
#[test]
fn creates_requested_files() {
    let (_tmp, out) = corpus_dir();
    let mut rng = StdRng::seed_from_u64(1);

    let report = run_with_rng(&small_config(out.clone()), &mut rng).unwrap();

    assert_eq!(report.len(), 5);
    for (i, record) in report.iter().enumerate() {
        assert_eq!(record.path, out.join(format!("file{i:02}.txt")));
        assert!(record.path.is_file());
    }

    let on_disk = fs::read_dir(&out).unwrap().count();
    assert_eq!(on_disk, 5);
}

/// Reported and actual sizes agree and stay inside the unit bounds.
#[test]
fn sizes_within_bounds() {
    let (_tmp, out) = corpus_dir();
    let mut rng = StdRng::seed_from_u64(2);

    let config = small_config(out);
    let report = run_with_rng(&config, &mut rng).unwrap();

    for record in report {
        let actual = fs::metadata(&record.path).unwrap().len();
        assert_eq!(actual, record.size_bytes);
        assert!(actual >= config.min_units * config.unit_bytes);
        assert!(actual <= config.max_units * config.unit_bytes);
        assert_eq!(actual % config.unit_bytes, 0);
    }
}

/// Every byte written comes from the file's alphabet.
#[test]
fn contents_drawn_from_alphabet() {
    let (_tmp, out) = corpus_dir();
    fs::create_dir(&out).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let alphabet = draw_alphabet(&mut rng, 32, 128);
    let path = out.join("test_0.txt");
    write_random_file(&mut rng, &path, 8 * 1024, &alphabet).unwrap();

    let allowed: HashSet<u8> = alphabet.iter().copied().collect();
    let contents = fs::read(&path).unwrap();
    assert_eq!(contents.len(), 8 * 1024);
    assert!(contents.iter().all(|b| allowed.contains(b)));
}

/// A zero count still creates the directory but writes nothing.
#[test]
fn zero_count_creates_empty_directory() {
    let (_tmp, out) = corpus_dir();
    let mut rng = StdRng::seed_from_u64(4);

    let mut config = small_config(out.clone());
    config.count = 0;

    let report = run_with_rng(&config, &mut rng).unwrap();
    assert!(report.is_empty());
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

/// Contradictory bounds are rejected before anything touches the disk.
#[test]
fn min_above_max_is_rejected_before_writing() {
    let (_tmp, out) = corpus_dir();
    let mut rng = StdRng::seed_from_u64(5);

    let mut config = small_config(out.clone());
    config.min_units = 10;
    config.max_units = 2;

    let err = run_with_rng(&config, &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidSizeRange { min: 10, max: 2 }));
    assert!(err.is_parameter_error());
    assert!(!out.exists());
}

/// An existing target file is never overwritten.
#[test]
fn existing_file_is_not_overwritten() {
    let (_tmp, out) = corpus_dir();
    fs::create_dir(&out).unwrap();
    fs::write(out.join("file00.txt"), b"keep me").unwrap();
    let mut rng = StdRng::seed_from_u64(6);

    let mut config = small_config(out.clone());
    config.create_dir = false;

    let err = run_with_rng(&config, &mut rng).unwrap_err();
    assert!(matches!(err, Error::CreateFile { .. }));
    assert!(!err.is_parameter_error());
    assert_eq!(fs::read(out.join("file00.txt")).unwrap(), b"keep me");
}

/// Without create_dir, a missing directory fails on the first file.
#[test]
fn missing_directory_fails() {
    let (_tmp, out) = corpus_dir();
    let mut rng = StdRng::seed_from_u64(7);

    let mut config = small_config(out);
    config.create_dir = false;

    let err = run_with_rng(&config, &mut rng).unwrap_err();
    assert!(matches!(err, Error::CreateFile { .. }));
}

/// Creating the directory twice fails the second run.
#[test]
fn existing_directory_fails_when_create_dir_set() {
    let (_tmp, out) = corpus_dir();
    fs::create_dir(&out).unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    let err = run_with_rng(&small_config(out), &mut rng).unwrap_err();
    assert!(matches!(err, Error::CreateDir { .. }));
}

/// Equal seeds and configs produce byte-identical files.
#[test]
fn seeded_runs_are_reproducible() {
    let (_tmp_a, out_a) = corpus_dir();
    let (_tmp_b, out_b) = corpus_dir();

    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);

    let report_a = run_with_rng(&small_config(out_a), &mut rng_a).unwrap();
    let report_b = run_with_rng(&small_config(out_b), &mut rng_b).unwrap();

    assert_eq!(report_a.len(), report_b.len());
    for (a, b) in report_a.iter().zip(&report_b) {
        assert_eq!(a.size_bytes, b.size_bytes);
        assert_eq!(fs::read(&a.path).unwrap(), fs::read(&b.path).unwrap());
    }
}

/// The corpus naming variant lands on disk as `test_<N>.txt`.
#[test]
fn corpus_naming_variant() {
    let (_tmp, out) = corpus_dir();
    fs::create_dir(&out).unwrap();
    let mut rng = StdRng::seed_from_u64(10);

    let config = GenConfig {
        count: 3,
        min_units: 1,
        max_units: 2,
        unit_bytes: 64 * 1024,
        out_dir: out.clone(),
        naming: NamePattern::NumberedTest,
        byte_min: 32,
        byte_max: 128,
        create_dir: false,
    };

    let report = run_with_rng(&config, &mut rng).unwrap();
    assert_eq!(report.len(), 3);
    for i in 0..3 {
        assert!(out.join(format!("test_{i}.txt")).is_file());
    }
    for record in &report {
        let contents = fs::read(&record.path).unwrap();
        assert!(contents.iter().all(|&b| (32..=128).contains(&b)));
    }
}
