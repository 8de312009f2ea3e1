//! Quantization of spectra into fixed-width fields and byte packing.
//!
//! Every `round` here is `f64::round` (half away from zero), and every result
//! is clamped into its field width so out-of-range inputs saturate instead of
//! spilling into neighbouring bits.

use crate::types::ChannelSpectrum;

/// Round `value` and clamp it into an unsigned field of `bits` bits
pub fn quantize(value: f64, bits: u32) -> u32 {
    let max = ((1u32 << bits) - 1) as f64;
    // NaN saturates to 0 in the cast
    value.round().clamp(0.0, max) as u32
}

/// Everything the five header bytes carry
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub l_dc: f64,
    pub p_dc: f64,
    pub q_dc: f64,
    pub l_scale: f64,
    pub p_scale: f64,
    pub q_scale: f64,
    pub has_alpha: bool,
    pub is_landscape: bool,
    /// Luminance frequency count along the shorter axis (`ly` if landscape, else `lx`)
    pub short_axis_count: usize,
}

impl Header {
    pub fn new(l: &ChannelSpectrum, p: &ChannelSpectrum, q: &ChannelSpectrum) -> Self {
        Self {
            l_dc: l.dc,
            p_dc: p.dc,
            q_dc: q.dc,
            l_scale: l.scale,
            p_scale: p.scale,
            q_scale: q.scale,
            has_alpha: false,
            is_landscape: false,
            short_axis_count: 0,
        }
    }

    /// 24-bit field followed by 16-bit field, both little-endian
    pub fn to_bytes(&self) -> [u8; 5] {
        let header24 = quantize(63.0 * self.l_dc, 6)
            | quantize(31.5 + 31.5 * self.p_dc, 6) << 6
            | quantize(31.5 + 31.5 * self.q_dc, 6) << 12
            | quantize(31.0 * self.l_scale, 5) << 18
            | u32::from(self.has_alpha) << 23;

        let header16 = self.short_axis_count.min(7) as u32
            | quantize(63.0 * self.p_scale, 6) << 3
            | quantize(63.0 * self.q_scale, 6) << 9
            | u32::from(self.is_landscape) << 15;

        [
            (header24 & 0xFF) as u8,
            ((header24 >> 8) & 0xFF) as u8,
            (header24 >> 16) as u8,
            (header16 & 0xFF) as u8,
            (header16 >> 8) as u8,
        ]
    }
}

/// DC in the low nibble, scale in the high nibble
pub fn alpha_byte(a: &ChannelSpectrum) -> u8 {
    (quantize(15.0 * a.dc, 4) | quantize(15.0 * a.scale, 4) << 4) as u8
}

/// Appends 4-bit AC values to a byte buffer, low nibble first.
///
/// Parity carries across calls, so several channels pushed in sequence share
/// bytes at their boundaries.
pub struct NibbleWriter<'a> {
    out: &'a mut Vec<u8>,
    odd: bool,
}

impl<'a> NibbleWriter<'a> {
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, odd: false }
    }

    pub fn push(&mut self, f: f64) {
        let u = quantize(15.0 * f, 4) as u8;
        if self.odd {
            // odd parity means a byte was pushed by the previous call
            if let Some(last) = self.out.last_mut() {
                *last |= u << 4;
            }
        } else {
            self.out.push(u);
        }
        self.odd = !self.odd;
    }

    pub fn extend(&mut self, ac: &[f64]) {
        for &f in ac {
            self.push(f);
        }
    }
}

/// Number of bytes `ac_count` nibbles occupy
pub fn packed_len(ac_count: usize) -> usize {
    (ac_count + 1) / 2
}
