//! ThumbHash encoding for small RGBA images.
//!
//! A ThumbHash is a short byte sequence (typically 20-25 bytes) from which a
//! companion decoder reconstructs a blurry placeholder of the original image.
//! This library provides:
//! - The encoder itself: LPQA color transform, truncated cosine transform per
//!   channel, quantization and nibble packing
//! - Hex, base64 and array renderings of a hash
//! - Image file loading, discovery and parallel batch hashing
//!
//! ```
//! use thumbhash_core::rgba_to_thumb_hash;
//!
//! let pixels = [255, 0, 0, 255].repeat(4 * 4);
//! let hash = rgba_to_thumb_hash(4, 4, &pixels).unwrap();
//! assert_eq!(hash.len(), 24);
//! assert!(!hash.has_alpha());
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::{Config, LogLevel, OutputFormat, ResizeFilter};
pub use encoding::{encode_pixel_grid, rgba_to_thumb_hash, MAX_DIMENSION};
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod discovery;
pub mod encoding;
pub mod logging;
pub mod processing;
pub mod render;
pub mod types;

/// Render a hash the way the configuration asks for
pub fn format_hash(hash: &ThumbHash, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => hash.to_hex_string(),
        OutputFormat::Base64 => hash.to_base64(),
        OutputFormat::Array => hash.to_array_string(),
    }
}
