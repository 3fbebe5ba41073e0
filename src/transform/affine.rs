//! Affine transform helpers.

use crate::foundation::{
    core::{Affine, Vec2},
    math::{DECIMALS_AFTER_ROUND, round_to},
};

/// Compose two transforms so that `first` applies before `then`.
#[inline]
pub fn compose(first: Affine, then: Affine) -> Affine {
    then * first
}

/// The identity map.
#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Drop the translation component; only the 2x2 part affects sizes.
#[inline]
pub fn linear_part(t: Affine) -> Affine {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Affine::new([a, b, c, d, 0.0, 0.0])
}

/// Linear part with every coefficient rounded to four decimals.
///
/// Trig noise such as `cos(90°) = 6.1e-17` becomes an exact zero, which routes quarter-turn
/// rotations into the closed-form branches of the solver.
pub fn normalized_linear(t: Affine) -> Affine {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Affine::new([
        round_to(a, DECIMALS_AFTER_ROUND),
        round_to(b, DECIMALS_AFTER_ROUND),
        round_to(c, DECIMALS_AFTER_ROUND),
        round_to(d, DECIMALS_AFTER_ROUND),
        0.0,
        0.0,
    ])
}

/// True when the linear part is exactly the identity. Translation is ignored.
pub fn is_identity_linear(t: Affine) -> bool {
    let [a, b, c, d, _, _] = t.as_coeffs();
    a == 1.0 && b == 0.0 && c == 0.0 && d == 1.0
}

/// False for singular maps, e.g. a zero scale on either axis.
pub fn has_inverse(t: Affine) -> bool {
    t.determinant() != 0.0
}

/// Pure translation by `offset`.
#[inline]
pub fn translate(offset: Vec2) -> Affine {
    Affine::translate(offset)
}
