use kurbo::Size;

/// Matrix coefficients are rounded to this many decimals before solving, so that
/// rotations by multiples of 90 degrees produce exact zero coefficients.
pub(crate) const DECIMALS_AFTER_ROUND: i32 = 4;

/// Slack used when comparing an arranged size against a desired size.
pub(crate) const ACCEPTABLE_DELTA: f64 = 0.0001;

pub(crate) fn round_to(v: f64, decimals: i32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals);
    let r = (v * scale).round() / scale;
    // Fold -0.0 into 0.0 so debug output and serialized matrices stay stable.
    if r == 0.0 { 0.0 } else { r }
}

/// True when `a` is smaller than `b` on either axis by more than [`ACCEPTABLE_DELTA`].
pub(crate) fn is_size_smaller(a: Size, b: Size) -> bool {
    (a.width + ACCEPTABLE_DELTA < b.width) || (a.height + ACCEPTABLE_DELTA < b.height)
}

/// True when `size` fits inside `bounds` on both axes, allowing `epsilon` of overflow.
pub(crate) fn fits_within(size: Size, bounds: Size, epsilon: f64) -> bool {
    size.width <= bounds.width + epsilon && size.height <= bounds.height + epsilon
}

/// Multiplicative correction that brings `actual` back to `limit` on one axis.
///
/// Returns `1.0` when the axis is unconstrained, already fits, or is degenerate.
pub(crate) fn shrink_factor(limit: f64, actual: f64, epsilon: f64) -> f64 {
    if !limit.is_finite() || actual <= 0.0 || actual <= limit + epsilon {
        return 1.0;
    }
    (limit / actual).clamp(0.0, 1.0)
}

pub(crate) fn is_zero_size(size: Size) -> bool {
    size.width == 0.0 || size.height == 0.0
}
