use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::render;

/// An RGBA8 raster in row-major order: `pixels[(y * width + x) * 4 + channel]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a pixel buffer, checking that it matches the declared dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels in the grid
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<image::RgbaImage> for PixelGrid {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}

/// Bounds on the horizontal/vertical frequencies evaluated for one channel.
///
/// The active set is not the full `nx × ny` rectangle but the diamond
/// `cx * ny < nx * (ny - cy)`, which keeps roughly half of the terms and
/// biases toward low frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyCount {
    pub nx: usize,
    pub ny: usize,
}

impl FrequencyCount {
    pub const fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }

    /// `(cx, cy)` pairs of the diamond in scan order: `cy` outer, `cx` inner.
    /// The first pair is always the DC term `(0, 0)` when the set is non-empty.
    pub fn active_terms(&self) -> impl Iterator<Item = (usize, usize)> {
        let (nx, ny) = (self.nx, self.ny);
        (0..ny).flat_map(move |cy| {
            (0..)
                .take_while(move |cx| cx * ny < nx * (ny - cy))
                .map(move |cx| (cx, cy))
        })
    }

    /// Number of terms in the diamond, DC included
    pub fn term_count(&self) -> usize {
        self.active_terms().count()
    }

    /// Number of AC terms the diamond contributes to a hash
    pub fn ac_count(&self) -> usize {
        self.term_count().saturating_sub(1)
    }
}

/// Result of projecting one channel onto its frequency diamond
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSpectrum {
    /// Raw zero-frequency coefficient
    pub dc: f64,

    /// AC coefficients in diamond scan order, remapped into `[0, 1]`
    pub ac: Vec<f64>,

    /// Largest absolute AC coefficient before remapping
    pub scale: f64,
}

/// A finished ThumbHash byte sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThumbHash(Vec<u8>);

impl ThumbHash {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit 23 of the 24-bit header field
    pub fn has_alpha(&self) -> bool {
        self.0.get(2).map_or(false, |b| b & 0x80 != 0)
    }

    /// Bit 15 of the 16-bit header field
    pub fn is_landscape(&self) -> bool {
        self.0.get(4).map_or(false, |b| b & 0x80 != 0)
    }

    /// Uppercase, space separated hex, e.g. `60 9A 86 3D`
    pub fn to_hex_string(&self) -> String {
        render::to_hex_string(&self.0)
    }

    pub fn to_base64(&self) -> String {
        render::to_base64(&self.0)
    }

    /// Decimal byte list, e.g. `[96, 154, 134]`
    pub fn to_array_string(&self) -> String {
        render::to_array_string(&self.0)
    }
}

impl AsRef<[u8]> for ThumbHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<ThumbHash> for Vec<u8> {
    fn from(hash: ThumbHash) -> Self {
        hash.0
    }
}

impl fmt::Display for ThumbHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_counts() {
        assert_eq!(FrequencyCount::new(3, 3).term_count(), 6);
        assert_eq!(FrequencyCount::new(5, 5).term_count(), 15);
        assert_eq!(FrequencyCount::new(7, 7).term_count(), 28);
        assert_eq!(FrequencyCount::new(7, 3).term_count(), 15);
        assert_eq!(FrequencyCount::new(3, 7).term_count(), 15);
        assert_eq!(FrequencyCount::new(3, 3).ac_count(), 5);
        assert_eq!(FrequencyCount::new(0, 0).ac_count(), 0);
    }

    #[test]
    fn test_diamond_scan_order() {
        let terms: Vec<_> = FrequencyCount::new(3, 3).active_terms().collect();
        assert_eq!(terms, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_pixel_grid_rejects_wrong_length() {
        let err = PixelGrid::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.is_dimension_error());
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_header_flags() {
        let hash = ThumbHash::from_bytes(vec![0x60, 0x9A, 0x86, 0x3D, 0x0C, 0x3B]);
        assert!(hash.has_alpha());
        assert!(!hash.is_landscape());

        let hash = ThumbHash::from_bytes(vec![0x00, 0x00, 0x00, 0x00, 0x80]);
        assert!(!hash.has_alpha());
        assert!(hash.is_landscape());
    }
}
