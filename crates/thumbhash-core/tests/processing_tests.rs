mod common;

use tempfile::tempdir;
use thumbhash_core::discovery::discover_images;
use thumbhash_core::processing::{bench_file, hash_file, hash_files, load_pixel_grid};
use thumbhash_core::{format_hash, rgba_to_thumb_hash, Config, OutputFormat};

use common::{opaque_pattern, solid, to_image, translucent_pattern, write_png};

#[test]
fn test_png_round_trip_matches_in_memory_hash() {
    let dir = tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "pattern.png",
        &to_image(9, 14, translucent_pattern(9, 14)),
    );

    let from_file = hash_file(&path, &Config::default()).unwrap();
    let in_memory = rgba_to_thumb_hash(9, 14, &translucent_pattern(9, 14)).unwrap();
    assert_eq!(from_file, in_memory);
}

#[test]
fn test_large_file_is_shrunk_to_fit() {
    let dir = tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", &solid(300, 120, [20, 40, 60, 255]));

    let grid = load_pixel_grid(&path, &Config::default()).unwrap();
    assert_eq!((grid.width(), grid.height()), (100, 40));

    let hash = hash_file(&path, &Config::default()).unwrap();
    assert!(hash.is_landscape());
}

#[test]
fn test_large_file_rejected_without_fit() {
    let dir = tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", &solid(300, 120, [20, 40, 60, 255]));

    let config = Config {
        fit_to_max: false,
        ..Config::default()
    };
    let err = hash_file(&path, &config).unwrap_err();
    assert!(err.is_dimension_error());
}

#[test]
fn test_smaller_max_dimension() {
    let dir = tempdir().unwrap();
    let path = write_png(dir.path(), "tall.png", &to_image(40, 80, opaque_pattern(40, 80)));

    let config = Config {
        max_dimension: 32,
        ..Config::default()
    };
    let grid = load_pixel_grid(&path, &config).unwrap();
    assert_eq!((grid.width(), grid.height()), (16, 32));
}

#[test]
fn test_discover_and_hash_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    write_png(dir.path(), "a.png", &to_image(11, 7, opaque_pattern(11, 7)));
    write_png(&nested, "b.png", &solid(8, 8, [0, 0, 0, 0]));
    std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let config = Config::default();
    let images = discover_images(&[dir.path()], &config).unwrap();
    assert_eq!(images.len(), 2);

    let results = hash_files(&images, &config);
    assert!(results.iter().all(|r| r.is_ok()));

    let a = results
        .iter()
        .find(|r| r.path.ends_with("a.png"))
        .and_then(|r| r.hash.as_ref().ok())
        .unwrap();
    assert_eq!(
        format_hash(a, OutputFormat::Hex),
        "19 17 0E 24 8A 50 85 88 54 98 78 95 88 87 44 FA 39 F7 E7"
    );
    assert_eq!(
        format_hash(a, OutputFormat::Array),
        "[25, 23, 14, 36, 138, 80, 133, 136, 84, 152, 120, 149, 136, 135, 68, 250, 57, 247, 231]"
    );
}

#[test]
fn test_bench_file() {
    let dir = tempdir().unwrap();
    let path = write_png(dir.path(), "bench.png", &to_image(16, 16, opaque_pattern(16, 16)));

    let report = bench_file(&path, 3, &Config::default()).unwrap();
    assert_eq!(report.repeats, 3);
    assert_eq!((report.width, report.height), (16, 16));
    assert_eq!(
        report.hash,
        rgba_to_thumb_hash(16, 16, &opaque_pattern(16, 16)).unwrap()
    );
}
