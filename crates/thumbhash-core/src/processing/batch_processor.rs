//! Hashing many image files in parallel.
//!
//! Files are decoded and encoded independently on a rayon pool. A failure on one
//! file is logged and recorded in its result; it never stops the rest of the batch.
//! Results come back in the same order as the input paths.
//!
//! # Example
//! ```no_run
//! use std::path::PathBuf;
//! use thumbhash_core::{processing::hash_files, Config};
//!
//! let images = vec![PathBuf::from("image1.jpg"), PathBuf::from("image2.png")];
//! for result in hash_files(&images, &Config::default()) {
//!     match &result.hash {
//!         Ok(hash) => println!("{}\t{}", result.path.display(), hash),
//!         Err(e) => eprintln!("{}: {}", result.path.display(), e),
//!     }
//! }
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::file_processing::hash_file;
use crate::config::Config;
use crate::error::Result;
use crate::logging::log_hash_error;
use crate::types::ThumbHash;

/// Outcome of hashing one file
#[derive(Debug)]
pub struct ImageHashResult {
    /// Path to the image file
    pub path: PathBuf,
    /// The hash, or why it could not be computed
    pub hash: Result<ThumbHash>,
    /// Time spent decoding and encoding
    pub elapsed: Duration,
}

impl ImageHashResult {
    pub fn is_ok(&self) -> bool {
        self.hash.is_ok()
    }
}

fn progress_bar(len: usize, config: &Config) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("##-")),
        Err(e) => warn!("Falling back to default progress style: {}", e),
    }
    bar.set_message("Computing thumbhashes...");
    bar
}

fn hash_one(path: &Path, config: &Config, bar: &ProgressBar) -> ImageHashResult {
    let start = Instant::now();
    let hash = hash_file(path, config);
    if let Err(e) = &hash {
        log_hash_error(path, e);
    }
    bar.inc(1);

    ImageHashResult {
        path: path.to_path_buf(),
        hash,
        elapsed: start.elapsed(),
    }
}

/// Hash every path, in parallel, preserving input order
pub fn hash_files(paths: &[PathBuf], config: &Config) -> Vec<ImageHashResult> {
    let start = Instant::now();
    let threads = config.effective_threads();
    info!("Hashing {} images on {} threads", paths.len(), threads);

    let bar = progress_bar(paths.len(), config);

    let results: Vec<ImageHashResult> =
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| hash_one(path, config, &bar))
                    .collect()
            }),
            Err(e) => {
                warn!("Failed to build thread pool, hashing sequentially: {}", e);
                paths
                    .iter()
                    .map(|path| hash_one(path, config, &bar))
                    .collect()
            }
        };

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    bar.finish_with_message(format!(
        "Done: {} hashed, {} failed",
        results.len() - failed,
        failed
    ));
    info!(
        "Hashed {} images ({} failed) in {:.2?}",
        results.len(),
        failed,
        start.elapsed()
    );

    results
}
