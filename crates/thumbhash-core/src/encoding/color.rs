//! RGBA to LPQA conversion, compositing every pixel atop the image's average color.

use ndarray::Array2;

/// Scalar channels ready for frequency encoding, each shaped `(height, width)`
#[derive(Debug, Clone)]
pub struct LpqaChannels {
    /// Luminance `(r + g + b) / 3`
    pub l: Array2<f64>,
    /// Yellow/blue opponent axis `(r + g) / 2 - b`
    pub p: Array2<f64>,
    /// Red/green opponent axis `r - g`
    pub q: Array2<f64>,
    /// Raw per-pixel alpha in `[0, 1]`, not composited
    pub a: Array2<f64>,
    /// Alpha-weighted average color, all zero for a fully transparent image
    pub average: [f64; 3],
    /// False only when every pixel is fully opaque
    pub has_alpha: bool,
}

/// Convert a row-major RGBA8 buffer into LPQA channels.
///
/// The caller guarantees `rgba.len() == width * height * 4`.
pub fn rgba_to_lpqa(width: usize, height: usize, rgba: &[u8]) -> LpqaChannels {
    debug_assert_eq!(rgba.len(), width * height * 4);

    let mut average = [0.0f64; 3];
    let mut alpha_sum = 0.0f64;

    for px in rgba.chunks_exact(4) {
        let alpha = f64::from(px[3]) / 255.0;
        average[0] += f64::from(px[0]) * alpha;
        average[1] += f64::from(px[1]) * alpha;
        average[2] += f64::from(px[2]) * alpha;
        alpha_sum += alpha;
    }

    for channel in average.iter_mut() {
        *channel /= 255.0;
        // Fully transparent image: keep the zero average instead of dividing by zero
        if alpha_sum > 0.0 {
            *channel /= alpha_sum;
        }
    }

    // 255 / 255 is exactly 1.0, so an all-opaque image sums to exactly w * h
    let has_alpha = alpha_sum < (width * height) as f64;

    let mut l = Array2::zeros((height, width));
    let mut p = Array2::zeros((height, width));
    let mut q = Array2::zeros((height, width));
    let mut a = Array2::zeros((height, width));

    for (i, px) in rgba.chunks_exact(4).enumerate() {
        let (y, x) = (i / width, i % width);
        let alpha = f64::from(px[3]) / 255.0;
        let r = f64::from(px[0]) / 255.0 * alpha + average[0] * (1.0 - alpha);
        let g = f64::from(px[1]) / 255.0 * alpha + average[1] * (1.0 - alpha);
        let b = f64::from(px[2]) / 255.0 * alpha + average[2] * (1.0 - alpha);

        l[[y, x]] = (r + g + b) / 3.0;
        p[[y, x]] = (r + g) / 2.0 - b;
        q[[y, x]] = r - g;
        a[[y, x]] = alpha;
    }

    LpqaChannels {
        l,
        p,
        q,
        a,
        average,
        has_alpha,
    }
}
