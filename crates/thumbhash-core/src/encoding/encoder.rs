use log::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{FrequencyCount, PixelGrid, ThumbHash};

use super::color::rgba_to_lpqa;
use super::pack::{alpha_byte, packed_len, Header, NibbleWriter};
use super::spectrum::encode_channel;

/// Largest width or height the encoder accepts
pub const MAX_DIMENSION: u32 = 100;

/// Chroma channels always use a 3x3 diamond
pub const CHROMA_COUNTS: FrequencyCount = FrequencyCount::new(3, 3);

/// The alpha channel, when present, always uses a 5x5 diamond
pub const ALPHA_COUNTS: FrequencyCount = FrequencyCount::new(5, 5);

/// Adaptive luminance frequency counts `(lx, ly)` before the minimum of 3 is applied.
///
/// The longer side gets `7` frequencies (`5` when alpha takes up room in the hash)
/// and the shorter side a proportional share, never less than one.
pub fn luminance_counts(width: u32, height: u32, has_alpha: bool) -> (usize, usize) {
    let l_limit = if has_alpha { 5.0 } else { 7.0 };
    let longest = f64::from(width.max(height));
    let lx = (l_limit * f64::from(width) / longest).round().max(1.0) as usize;
    let ly = (l_limit * f64::from(height) / longest).round().max(1.0) as usize;
    (lx, ly)
}

/// Total AC terms a hash of this shape carries, across all channels
pub fn ac_term_count(width: u32, height: u32, has_alpha: bool) -> usize {
    let (lx, ly) = luminance_counts(width, height, has_alpha);
    let luminance = FrequencyCount::new(lx.max(3), ly.max(3)).ac_count();
    let alpha = if has_alpha { ALPHA_COUNTS.ac_count() } else { 0 };
    luminance + 2 * CHROMA_COUNTS.ac_count() + alpha
}

/// Byte length of a hash of this shape
pub fn hash_len(width: u32, height: u32, has_alpha: bool) -> usize {
    let header = if has_alpha { 6 } else { 5 };
    header + packed_len(ac_term_count(width, height, has_alpha))
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::Dimension { width, height });
    }
    Ok(())
}

/// Encode a row-major RGBA8 buffer of `width x height` pixels into a ThumbHash.
///
/// Fails with a dimension error when either side is 0 or larger than 100, or
/// when `rgba` does not hold exactly `width * height * 4` bytes. Both checks
/// run before any pixel is read.
pub fn rgba_to_thumb_hash(width: u32, height: u32, rgba: &[u8]) -> Result<ThumbHash> {
    check_dimensions(width, height)?;

    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(Error::DimensionMismatch {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    Ok(encode_unchecked(width, height, rgba))
}

/// Encode a validated pixel grid
pub fn encode_pixel_grid(grid: &PixelGrid) -> Result<ThumbHash> {
    check_dimensions(grid.width(), grid.height())?;
    Ok(encode_unchecked(grid.width(), grid.height(), grid.pixels()))
}

fn encode_unchecked(width: u32, height: u32, rgba: &[u8]) -> ThumbHash {
    let channels = rgba_to_lpqa(width as usize, height as usize, rgba);
    let has_alpha = channels.has_alpha;

    let (lx, ly) = luminance_counts(width, height, has_alpha);
    let l_counts = FrequencyCount::new(lx.max(3), ly.max(3));
    debug!(
        "Encoding {}x{} image: alpha={}, luminance {}x{}",
        width, height, has_alpha, l_counts.nx, l_counts.ny
    );

    let l = encode_channel(channels.l.view(), l_counts);
    let p = encode_channel(channels.p.view(), CHROMA_COUNTS);
    let q = encode_channel(channels.q.view(), CHROMA_COUNTS);
    let a = has_alpha.then(|| encode_channel(channels.a.view(), ALPHA_COUNTS));

    let is_landscape = width > height;
    let mut header = Header::new(&l, &p, &q);
    header.has_alpha = has_alpha;
    header.is_landscape = is_landscape;
    header.short_axis_count = if is_landscape { ly } else { lx };
    trace!("Header fields: {:?}", header);

    let mut hash = Vec::with_capacity(hash_len(width, height, has_alpha));
    hash.extend_from_slice(&header.to_bytes());
    if let Some(a) = &a {
        hash.push(alpha_byte(a));
    }

    let mut nibbles = NibbleWriter::new(&mut hash);
    nibbles.extend(&l.ac);
    nibbles.extend(&p.ac);
    nibbles.extend(&q.ac);
    if let Some(a) = &a {
        nibbles.extend(&a.ac);
    }

    ThumbHash::from_bytes(hash)
}
