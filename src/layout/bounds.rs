use crate::{
    foundation::core::{Affine, Point, Rect, Size},
    transform::affine::linear_part,
};

/// Size of the axis-aligned box enclosing `[0, width] x [0, height]` under the linear part
/// of `transform`.
///
/// Translation is ignored. Never fails: a zero transform collapses to `0x0`.
pub fn compute_transformed_bounds(transform: Affine, width: f64, height: f64) -> Size {
    transformed_rect(transform, Size::new(width, height)).size()
}

/// Like [`compute_transformed_bounds`] but keeps the box origin, which may be negative.
pub(crate) fn transformed_rect(transform: Affine, size: Size) -> Rect {
    let m = linear_part(transform);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(size.width, 0.0),
        Point::new(0.0, size.height),
        Point::new(size.width, size.height),
    ]
    .map(|p| m * p);

    let mut x0 = f64::INFINITY;
    let mut y0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    let mut y1 = f64::NEG_INFINITY;
    for p in corners {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    Rect::new(x0, y0, x1, y1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bounds.rs"]
mod tests;
