// Core encoding stages, leaf first
pub mod color;
pub mod pack;
pub mod spectrum;

mod encoder;

pub use color::{rgba_to_lpqa, LpqaChannels};
pub use encoder::{
    ac_term_count, encode_pixel_grid, hash_len, luminance_counts, rgba_to_thumb_hash,
    ALPHA_COUNTS, CHROMA_COUNTS, MAX_DIMENSION,
};
pub use spectrum::encode_channel;
