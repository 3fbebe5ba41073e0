//! Layout under 2D affine transforms.
//!
//! A layout transform changes how much room content takes up, not just how it is drawn. This
//! crate answers the two questions a two-pass (measure, then arrange) layout system asks of a
//! transformed single-child container:
//!
//! 1. **Measure**: given the space available to the *transformed* container and a child that
//!    reports a desired size for any offered size, what untransformed size should the child be
//!    offered, and how big is its transformed silhouette?
//! 2. **Arrange**: given the final rectangle, where does the untransformed child go and which
//!    transform maps it so that its silhouette is centered in that rectangle?
//!
//! Everything here is pure and synchronous. Degenerate transforms (zero scale, singular
//! matrices) collapse to zero-area results instead of failing.
//!
//! ```
//! use layout_transformer::{LayoutTransform, Size, SolverSettings, measure};
//!
//! let t = LayoutTransform::rotate(45.0).to_affine();
//! let mut child = |offer: Size| Size::new(offer.width.min(100.0), offer.height.min(100.0));
//! let out = measure(Some(t), Size::new(200.0, 200.0), &mut child, &SolverSettings::default());
//! assert_eq!(out.child_desired, Size::new(100.0, 100.0));
//! assert!((out.desired.width - 141.42).abs() < 0.01);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;

/// Transform descriptors and affine helpers.
pub mod transform;

pub use foundation::core::{Affine, Point, Rect, Size, SolverSettings, Vec2};
pub use foundation::error::{LayoutError, LayoutResult};
pub use layout::bounds::compute_transformed_bounds;
pub use layout::solver::{ArrangeOutcome, LayoutChild, MeasureOutcome, arrange, measure};
pub use layout::transformer::LayoutTransformer;
pub use transform::descriptor::LayoutTransform;
