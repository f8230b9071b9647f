//! Fixed-point to double conversions.
//!
//! These map raw integer draws onto uniform doubles in the open interval
//! (0, 1) with 32, 48 or 52 bits of mantissa resolution. The 32-bit engines
//! combine two draws for the wider resolutions; the 64-bit engines shift
//! their raw output down to 53 bits and reject zero.
//!
//! The first draw is read as a signed 32-bit integer scaled by 2^-32, which
//! lands in [-0.5, 0.5); the bias `0.5 + 2^-(k+1)` then centres each of the
//! 2^k output cells so neither endpoint can be produced.

/// 2^-32.
pub const INV_2POW32: f64 = 1.0 / 4_294_967_296.0;
/// 2^-48.
pub const INV_2POW48: f64 = INV_2POW32 / 65_536.0;
/// 2^-52.
pub const INV_2POW52: f64 = INV_2POW32 / 1_048_576.0;
/// 2^-53.
pub const INV_2POW53: f64 = INV_2POW52 / 2.0;

/// Converts one 32-bit draw to a double in (0, 1) with 32-bit resolution.
///
/// # Examples
///
/// ```rust
/// use zigrand::convert::fixed32_to_open_unit;
///
/// let lo = fixed32_to_open_unit(0x8000_0000);
/// let hi = fixed32_to_open_unit(0x7fff_ffff);
/// assert!(lo > 0.0 && hi < 1.0);
/// ```
#[inline]
pub fn fixed32_to_open_unit(hi: u32) -> f64 {
    f64::from(hi as i32) * INV_2POW32 + (0.5 + INV_2POW32 / 2.0)
}

/// Converts two 32-bit draws to a double in (0, 1) with 48-bit resolution.
///
/// The low 16 bits of `lo` extend the mantissa of `hi`.
#[inline]
pub fn fixed48_to_open_unit(hi: u32, lo: u32) -> f64 {
    f64::from(hi as i32) * INV_2POW32
        + (0.5 + INV_2POW48 / 2.0)
        + f64::from(lo & 0x0000_ffff) * INV_2POW48
}

/// Converts two 32-bit draws to a double in (0, 1) with 52-bit resolution.
///
/// The low 20 bits of `lo` extend the mantissa of `hi`.
#[inline]
pub fn fixed52_to_open_unit(hi: u32, lo: u32) -> f64 {
    f64::from(hi as i32) * INV_2POW32
        + (0.5 + INV_2POW52 / 2.0)
        + f64::from(lo & 0x000f_ffff) * INV_2POW52
}

/// Scales a nonzero 53-bit integer to a double in (0, 1).
///
/// Callers obtain `bits` as `raw >> 11` and redraw while it is zero.
#[inline]
pub fn bits53_to_open_unit(bits: u64) -> f64 {
    bits as f64 * INV_2POW53
}

/// Draws from `next_u64` until the top 53 bits are nonzero and scales them.
#[inline]
pub fn open_unit_from_u64<F: FnMut() -> u64>(mut next_u64: F) -> f64 {
    loop {
        let bits = next_u64() >> 11;
        if bits != 0 {
            return bits53_to_open_unit(bits);
        }
    }
}

/// Maps a double in (0, 1) to a 32-bit integer as `⌊(2^32 - 1)·u⌋`.
#[inline]
pub fn unit_to_u32(u: f64) -> u32 {
    (f64::from(u32::MAX) * u) as u32
}
