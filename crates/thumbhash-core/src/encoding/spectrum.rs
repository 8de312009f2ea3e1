//! Projection of a single channel onto a diamond of 2D cosine basis functions.
//!
//! For every active `(cx, cy)` the coefficient is
//!
//! ```text
//! f(cx, cy) = 1/(w·h) · Σ_y Σ_x channel[y, x] · cos(π/w · cx · (x + ½)) · cos(π/h · cy · (y + ½))
//! ```
//!
//! Accumulation is row by row (`y` ascending, then `x` ascending) into a single
//! running sum that is divided by `w·h` once at the end. Floating point addition
//! is not associative, so this order is part of the output format: changing it
//! can flip the last quantized bit of a hash.

use std::f64::consts::PI;

use ndarray::{Array2, ArrayView2};

use crate::types::{ChannelSpectrum, FrequencyCount};

/// `table[[k, i]] = cos(π/n · k · (i + ½))` for `k < frequencies`, `i < n`
fn cosine_table(frequencies: usize, n: usize) -> Array2<f64> {
    Array2::from_shape_fn((frequencies, n), |(k, i)| {
        (PI / n as f64 * k as f64 * (i as f64 + 0.5)).cos()
    })
}

/// Encode one `(height, width)` channel with the given frequency counts.
///
/// AC terms come back remapped to `0.5 + 0.5 · f / scale`. A channel with no
/// spatial variation at all (`scale == 0`) yields AC terms of exactly `0.5`.
pub fn encode_channel(channel: ArrayView2<'_, f64>, counts: FrequencyCount) -> ChannelSpectrum {
    let (h, w) = channel.dim();
    let area = (w * h) as f64;

    let cos_x = cosine_table(counts.nx, w);
    let cos_y = cosine_table(counts.ny, h);

    let mut dc = 0.0;
    let mut ac = Vec::with_capacity(counts.ac_count());
    let mut scale = 0.0f64;

    for (cx, cy) in counts.active_terms() {
        let fx = cos_x.row(cx);
        let mut f = 0.0;
        for (row, &fy) in channel.outer_iter().zip(cos_y.row(cy).iter()) {
            for (&value, &cos) in row.iter().zip(fx.iter()) {
                f += value * cos * fy;
            }
        }
        f /= area;

        if cx > 0 || cy > 0 {
            ac.push(f);
            scale = scale.max(f.abs());
        } else {
            dc = f;
        }
    }

    if scale > 0.0 {
        let step = 0.5 / scale;
        for f in ac.iter_mut() {
            *f = 0.5 + step * *f;
        }
    } else {
        ac.iter_mut().for_each(|f| *f = 0.5);
    }

    ChannelSpectrum { dc, ac, scale }
}
