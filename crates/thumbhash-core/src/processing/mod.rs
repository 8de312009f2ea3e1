// Thin collaborators around the encoder: file loading, batches, timing
mod batch_processor;
mod bench;
mod file_processing;

pub use batch_processor::{hash_files, ImageHashResult};
pub use bench::{bench_file, bench_pixel_grid, BenchReport};
pub use file_processing::{
    fit_image, hash_file, hash_image, image_to_pixel_grid, load_pixel_grid,
};
