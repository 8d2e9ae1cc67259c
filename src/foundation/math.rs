#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `x.clamp(lo, hi)` that never panics: when `hi < lo` the lower bound wins.
#[inline]
pub(crate) fn clamp_lo_wins(x: f64, lo: f64, hi: f64) -> f64 {
    x.min(hi).max(lo)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
