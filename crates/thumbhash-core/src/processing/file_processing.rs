//! Loading image files into pixel grids the encoder accepts

use image::{DynamicImage, ImageError};
use log::debug;
use std::path::Path;

use crate::config::Config;
use crate::encoding::encode_pixel_grid;
use crate::error::{Error, Result};
use crate::logging::log_file_error;
use crate::types::{PixelGrid, ThumbHash};

/// Shrink an image so neither side exceeds `config.max_dimension`.
///
/// Aspect ratio is preserved. Images already within bounds, or any image when
/// `fit_to_max` is off, are returned untouched.
pub fn fit_image(img: DynamicImage, config: &Config) -> DynamicImage {
    let max = config.max_dimension;
    if !config.fit_to_max || (img.width() <= max && img.height() <= max) {
        return img;
    }

    let resized = img.resize(max, max, config.resize_filter.into());
    debug!(
        "Resized {}x{} -> {}x{}",
        img.width(),
        img.height(),
        resized.width(),
        resized.height()
    );
    resized
}

/// Convert a decoded image into the RGBA8 grid the encoder reads
pub fn image_to_pixel_grid(img: DynamicImage, config: &Config) -> PixelGrid {
    PixelGrid::from(fit_image(img, config).into_rgba8())
}

/// Decode an image file into an RGBA8 pixel grid
pub fn load_pixel_grid(path: &Path, config: &Config) -> Result<PixelGrid> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|e| {
        log_file_error(path, "decode", &e);
        match e {
            ImageError::Unsupported(u) => Error::UnsupportedFormat(u.to_string()),
            other => Error::Image(other),
        }
    })?;
    Ok(image_to_pixel_grid(img, config))
}

/// Hash an image already in memory
pub fn hash_image(img: DynamicImage, config: &Config) -> Result<ThumbHash> {
    encode_pixel_grid(&image_to_pixel_grid(img, config))
}

/// Load and hash a single image file
pub fn hash_file(path: &Path, config: &Config) -> Result<ThumbHash> {
    let grid = load_pixel_grid(path, config)?;
    debug!(
        "Hashing '{}' ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    encode_pixel_grid(&grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checkerboard(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        }))
    }

    #[test]
    fn test_fit_image_preserves_aspect() {
        let fitted = fit_image(checkerboard(400, 200), &Config::default());
        assert_eq!((fitted.width(), fitted.height()), (100, 50));
    }

    #[test]
    fn test_fit_image_leaves_small_images_alone() {
        let fitted = fit_image(checkerboard(30, 90), &Config::default());
        assert_eq!((fitted.width(), fitted.height()), (30, 90));
    }

    #[test]
    fn test_no_fit_rejects_large_images() {
        let config = Config {
            fit_to_max: false,
            ..Config::default()
        };
        let err = hash_image(checkerboard(101, 50), &config).unwrap_err();
        assert!(matches!(
            err,
            Error::Dimension {
                width: 101,
                height: 50
            }
        ));
    }

    #[test]
    fn test_hash_image_fits_large_images() {
        let hash = hash_image(checkerboard(640, 480), &Config::default()).unwrap();
        assert!(hash.is_landscape());
        assert!(!hash.has_alpha());
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixels.dat");
        std::fs::write(&path, b"\x00\x01\x02").unwrap();

        let err = hash_file(&path, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_corrupt_png_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();

        let err = load_pixel_grid(&path, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = hash_file(Path::new("/no/such/image.png"), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
