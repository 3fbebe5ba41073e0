//! Serializable description of a layout transform.

use crate::{
    foundation::{
        core::Affine,
        error::{LayoutError, LayoutResult},
    },
    transform::affine,
};

/// A transform as a host would describe it, before it is flattened into an [`Affine`].
///
/// Angles are in degrees. In a [`LayoutTransform::Group`] the first child applies first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutTransform {
    /// No transform.
    #[default]
    Identity,
    /// Rotation about the origin.
    Rotate {
        /// Clockwise in a y-down coordinate system.
        angle: f64,
    },
    /// Non-uniform scale. Negative factors flip.
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
    /// Shear by the tangents of two angles.
    Skew {
        /// Shifts x in proportion to y.
        angle_x: f64,
        /// Shifts y in proportion to x.
        angle_y: f64,
    },
    /// Raw coefficients: `(x, y)` maps to `(a*x + c*y + e, b*x + d*y + f)`.
    Matrix {
        /// x contribution to x.
        a: f64,
        /// x contribution to y.
        b: f64,
        /// y contribution to x.
        c: f64,
        /// y contribution to y.
        d: f64,
        /// Horizontal translation; ignored by layout.
        #[serde(default)]
        e: f64,
        /// Vertical translation; ignored by layout.
        #[serde(default)]
        f: f64,
    },
    /// Children applied in order, first to last.
    Group(Vec<LayoutTransform>),
}

impl LayoutTransform {
    /// Rotation by `angle` degrees.
    pub fn rotate(angle: f64) -> Self {
        Self::Rotate { angle }
    }

    /// Scale by `x` horizontally and `y` vertically.
    pub fn scale(x: f64, y: f64) -> Self {
        Self::Scale { x, y }
    }

    /// Skew by two angles in degrees.
    pub fn skew(angle_x: f64, angle_y: f64) -> Self {
        Self::Skew { angle_x, angle_y }
    }

    /// Linear matrix without translation.
    pub fn matrix(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Matrix {
            a,
            b,
            c,
            d,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Flatten into a single affine map. Groups compose their children in order.
    pub fn to_affine(&self) -> Affine {
        match self {
            Self::Identity => affine::identity(),
            Self::Rotate { angle } => Affine::rotate(angle.to_radians()),
            Self::Scale { x, y } => Affine::scale_non_uniform(*x, *y),
            Self::Skew { angle_x, angle_y } => Affine::new([
                1.0,
                angle_y.to_radians().tan(),
                angle_x.to_radians().tan(),
                1.0,
                0.0,
                0.0,
            ]),
            Self::Matrix { a, b, c, d, e, f } => Affine::new([*a, *b, *c, *d, *e, *f]),
            Self::Group(children) => children
                .iter()
                .fold(affine::identity(), |acc, child| {
                    affine::compose(acc, child.to_affine())
                }),
        }
    }

    /// Every number must be finite and skew angles must keep a finite tangent.
    pub fn validate(&self) -> LayoutResult<()> {
        fn finite(name: &str, v: f64) -> LayoutResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(LayoutError::validation(format!(
                    "{name} must be finite, got {v}"
                )))
            }
        }

        match self {
            Self::Identity => Ok(()),
            Self::Rotate { angle } => finite("rotate.angle", *angle),
            Self::Scale { x, y } => {
                finite("scale.x", *x)?;
                finite("scale.y", *y)
            }
            Self::Skew { angle_x, angle_y } => {
                finite("skew.angle_x", *angle_x)?;
                finite("skew.angle_y", *angle_y)?;
                // tan() blows up at +-90 degrees.
                for (name, v) in [("skew.angle_x", angle_x), ("skew.angle_y", angle_y)] {
                    if (v.rem_euclid(180.0) - 90.0).abs() < 1e-9 {
                        return Err(LayoutError::validation(format!(
                            "{name} must not be an odd multiple of 90 degrees"
                        )));
                    }
                }
                Ok(())
            }
            Self::Matrix { a, b, c, d, e, f } => {
                for (name, v) in [
                    ("matrix.a", a),
                    ("matrix.b", b),
                    ("matrix.c", c),
                    ("matrix.d", d),
                    ("matrix.e", e),
                    ("matrix.f", f),
                ] {
                    finite(name, *v)?;
                }
                Ok(())
            }
            Self::Group(children) => children.iter().try_for_each(Self::validate),
        }
    }

    /// Parse from JSON and validate.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        let t: Self = serde_json::from_str(s)?;
        t.validate()?;
        Ok(t)
    }
}

impl From<LayoutTransform> for Affine {
    fn from(value: LayoutTransform) -> Self {
        value.to_affine()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/descriptor.rs"]
mod tests;
