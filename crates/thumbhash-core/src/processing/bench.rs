use log::info;
use std::path::Path;
use std::time::{Duration, Instant};

use super::file_processing::load_pixel_grid;
use crate::config::Config;
use crate::encoding::encode_pixel_grid;
use crate::error::{Error, Result};
use crate::types::{PixelGrid, ThumbHash};

/// Timing of repeated encodes of one image
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub width: u32,
    pub height: u32,
    pub repeats: usize,
    pub total: Duration,
    /// Hash produced by the last run
    pub hash: ThumbHash,
}

impl BenchReport {
    /// Average milliseconds per encode
    pub fn mean_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0 / self.repeats as f64
    }
}

/// Encode an in-memory grid `repeats` times. Decoding is not timed.
pub fn bench_pixel_grid(grid: &PixelGrid, repeats: usize) -> Result<BenchReport> {
    if repeats == 0 {
        return Err(Error::Configuration(
            "Benchmark needs at least one repeat".to_string(),
        ));
    }

    let start = Instant::now();
    let mut hash = encode_pixel_grid(grid)?;
    for _ in 1..repeats {
        hash = encode_pixel_grid(grid)?;
    }
    let total = start.elapsed();

    let report = BenchReport {
        width: grid.width(),
        height: grid.height(),
        repeats,
        total,
        hash,
    };
    info!(
        "Encoded {}x{} image {} times: {:.3} ms per encode",
        report.width,
        report.height,
        repeats,
        report.mean_ms()
    );
    Ok(report)
}

/// Decode `path` once, then time `repeats` encodes of it
pub fn bench_file(path: &Path, repeats: usize, config: &Config) -> Result<BenchReport> {
    let grid = load_pixel_grid(path, config)?;
    bench_pixel_grid(&grid, repeats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_reports_stable_hash() {
        let pixels: Vec<u8> = (0..32 * 24 * 4).map(|i| (i * 7 % 251) as u8).collect();
        let grid = PixelGrid::new(32, 24, pixels).unwrap();

        let report = bench_pixel_grid(&grid, 5).unwrap();
        assert_eq!(report.repeats, 5);
        assert_eq!(report.hash, encode_pixel_grid(&grid).unwrap());
        assert!(report.mean_ms() >= 0.0);
    }

    #[test]
    fn test_bench_rejects_zero_repeats() {
        let grid = PixelGrid::new(1, 1, vec![0, 0, 0, 255]).unwrap();
        assert!(matches!(
            bench_pixel_grid(&grid, 0),
            Err(Error::Configuration(_))
        ));
    }
}
