#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Opaque image with smoothly varying, non-separable color content
pub fn opaque_pattern(width: u32, height: u32) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[
                ((x * x * 7 + y * 3) % 256) as u8,
                ((x * y * 11 + 5) % 256) as u8,
                ((y * y * 5 + x * 17) % 256) as u8,
                255,
            ]);
        }
    }
    rgba
}

/// Image whose alpha falls off toward the bottom-right corner
pub fn translucent_pattern(width: u32, height: u32) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[
                ((x * 21) % 256) as u8,
                ((y * 31) % 256) as u8,
                (((x + y) * 13) % 256) as u8,
                (255 - (x * y * 7) % 256) as u8,
            ]);
        }
    }
    rgba
}

pub fn to_image(width: u32, height: u32, rgba: Vec<u8>) -> RgbaImage {
    RgbaImage::from_raw(width, height, rgba).expect("buffer matches dimensions")
}

/// Save a PNG into `dir` and return its path
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Path of a fixture under `tests/data`
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
