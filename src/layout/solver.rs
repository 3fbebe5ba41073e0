use crate::{
    foundation::{
        core::{Affine, Point, Rect, Size, SolverSettings},
        math::{fits_within, is_size_smaller, is_zero_size, shrink_factor},
    },
    layout::bounds::{compute_transformed_bounds, transformed_rect},
    transform::affine::{has_inverse, is_identity_linear, normalized_linear, translate},
};

/// The child side of a layout pass: reports a natural size for an offered size.
///
/// Implementations may be called several times per measure and must not have side effects
/// beyond normal layout caching.
pub trait LayoutChild {
    /// The child's desired size when offered `offer`.
    fn desired_size(&mut self, offer: Size) -> Size;
}

impl<F> LayoutChild for F
where
    F: FnMut(Size) -> Size,
{
    fn desired_size(&mut self, offer: Size) -> Size {
        self(offer)
    }
}

/// Result of [`measure`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MeasureOutcome {
    /// Size the transformed container asks for.
    pub desired: Size,
    /// The child's desired size from the last query.
    pub child_desired: Size,
    /// Size offered to the child that produced `child_desired`.
    pub child_constraint: Size,
    /// Refinement steps taken after the first query.
    pub iterations: u32,
    /// Whether the transformed child fits the available size within epsilon.
    pub converged: bool,
}

/// Result of [`arrange`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArrangeOutcome {
    /// Where the untransformed child is placed, and at what size.
    pub child_rect: Rect,
    /// Maps child-local coordinates into the container: linear part, then the placement offset.
    pub transform: Affine,
}

/// Measure a child under `transform` given the space available to the transformed container.
///
/// `None` and identity transforms query the child once with `available` and return its answer
/// untouched. Otherwise the largest untransformed box whose transformed bounds fit `available`
/// is handed to the child. For transforms with all four coefficients non-zero the offered size is
/// then refined multiplicatively, per axis, while the child's transformed answer overflows;
/// children whose size swings non-monotonically with the offered size may stop at the iteration
/// cap with a best-effort answer.
#[tracing::instrument(level = "debug", skip(child))]
pub fn measure<C>(
    transform: Option<Affine>,
    available: Size,
    child: &mut C,
    settings: &SolverSettings,
) -> MeasureOutcome
where
    C: LayoutChild + ?Sized,
{
    let Some(m) = non_identity(transform) else {
        let child_desired = child.desired_size(available);
        tracing::trace!(?child_desired, "identity transform, child measured directly");
        return MeasureOutcome {
            desired: child_desired,
            child_desired,
            child_constraint: available,
            iterations: 0,
            converged: true,
        };
    };

    let mut candidate = largest_child_size(m, available);
    let refine = is_general(m)
        && candidate.width.is_finite()
        && candidate.height.is_finite()
        && !is_zero_size(candidate);

    let mut child_desired = child.desired_size(candidate);
    let mut bounds = compute_transformed_bounds(m, child_desired.width, child_desired.height);
    let mut converged = fits_within(bounds, available, settings.epsilon);
    let mut iterations = 0;

    while refine && !converged && iterations < settings.max_iterations {
        let fx = shrink_factor(available.width, bounds.width, settings.epsilon);
        let fy = shrink_factor(available.height, bounds.height, settings.epsilon);
        candidate = Size::new(candidate.width * fx, candidate.height * fy);
        iterations += 1;

        child_desired = child.desired_size(candidate);
        bounds = compute_transformed_bounds(m, child_desired.width, child_desired.height);
        converged = fits_within(bounds, available, settings.epsilon);
        tracing::debug!(iterations, ?candidate, ?bounds, converged, "refined offer");
    }

    if refine && !converged {
        tracing::debug!(
            max_iterations = settings.max_iterations,
            "refinement stopped at the iteration cap"
        );
    }

    MeasureOutcome {
        desired: bounds,
        child_desired,
        child_constraint: candidate,
        iterations,
        converged,
    }
}

/// Arrange a child under `transform` inside `final_size`.
///
/// The child gets the largest box whose transformed bounds fit `final_size`, but never less
/// than `child_desired`. Its transformed bounds are centered in `final_size`. Arrange sizes are
/// expected to be finite; an infinite axis falls back to the child's transformed desired extent.
#[tracing::instrument(level = "debug")]
pub fn arrange(
    transform: Option<Affine>,
    final_size: Size,
    child_desired: Size,
) -> ArrangeOutcome {
    let Some(m) = non_identity(transform) else {
        return ArrangeOutcome {
            child_rect: Rect::from_origin_size(Point::ORIGIN, final_size),
            transform: Affine::IDENTITY,
        };
    };

    let final_size = if final_size.width.is_finite() && final_size.height.is_finite() {
        final_size
    } else {
        let fallback = compute_transformed_bounds(m, child_desired.width, child_desired.height);
        Size::new(
            finite_or(final_size.width, fallback.width),
            finite_or(final_size.height, fallback.height),
        )
    };

    let mut arranged = largest_child_size(m, final_size);
    if is_size_smaller(arranged, child_desired) {
        arranged = child_desired;
    }

    let bbox = transformed_rect(m, arranged);
    let origin = Point::new(
        -bbox.x0 + (final_size.width - bbox.width()) / 2.0,
        -bbox.y0 + (final_size.height - bbox.height()) / 2.0,
    );
    tracing::debug!(?arranged, ?origin, "arranged child");

    ArrangeOutcome {
        child_rect: Rect::from_origin_size(origin, arranged),
        transform: translate(origin.to_vec2()) * m,
    }
}

/// Largest untransformed size whose bounds under the linear map `m` fit `bounds`.
///
/// Infinite axes impose no constraint. When the two linear constraints both bind, the answer is
/// the point on the boundary that maximizes area.
pub(crate) fn largest_child_size(m: Affine, bounds: Size) -> Size {
    let [a, b, c, d, _, _] = m.as_coeffs();

    if bounds.width == 0.0 || bounds.height == 0.0 {
        return largest_under_zero_axis(m, bounds);
    }

    let mut width = bounds.width;
    let mut height = bounds.height;
    let infinite_width = width.is_infinite();
    if infinite_width {
        width = height;
    }
    let infinite_height = height.is_infinite();
    if infinite_height {
        height = width;
    }

    if infinite_width && infinite_height {
        return Size::new(f64::INFINITY, f64::INFINITY);
    }
    if !has_inverse(m) {
        return Size::ZERO;
    }

    // Each output axis gives a line in (child width, child height) space.
    let max_width_from_width = (width / a).abs();
    let max_height_from_width = (width / c).abs();
    let max_width_from_height = (height / b).abs();
    let max_height_from_height = (height / d).abs();

    let ideal_width_from_width = max_width_from_width / 2.0;
    let ideal_height_from_width = max_height_from_width / 2.0;
    let ideal_width_from_height = max_width_from_height / 2.0;
    let ideal_height_from_height = max_height_from_height / 2.0;

    let slope_from_width = -(max_height_from_width / max_width_from_width);
    let slope_from_height = -(max_height_from_height / max_width_from_height);

    let size = if b == 0.0 || c == 0.0 {
        let max_height = if infinite_height {
            f64::INFINITY
        } else {
            max_height_from_height
        };
        let max_width = if infinite_width {
            f64::INFINITY
        } else {
            max_width_from_width
        };

        if b == 0.0 && c == 0.0 {
            Size::new(max_width, max_height)
        } else if b == 0.0 {
            let h = ideal_height_from_width.min(max_height);
            Size::new(max_width - ((c * h) / a).abs(), h)
        } else {
            let w = ideal_width_from_height.min(max_width);
            Size::new(w, max_height - ((b * w) / d).abs())
        }
    } else if a == 0.0 || d == 0.0 {
        let max_width = if infinite_height {
            f64::INFINITY
        } else {
            max_width_from_height
        };
        let max_height = if infinite_width {
            f64::INFINITY
        } else {
            max_height_from_width
        };

        if a == 0.0 && d == 0.0 {
            Size::new(max_width, max_height)
        } else if a == 0.0 {
            let w = ideal_width_from_height.min(max_width);
            Size::new(w, max_height - ((d * w) / b).abs())
        } else {
            let h = ideal_height_from_width.min(max_height);
            Size::new(max_width - ((a * h) / c).abs(), h)
        }
    } else if ideal_height_from_width
        <= (slope_from_height * ideal_width_from_width) + max_height_from_height
    {
        Size::new(ideal_width_from_width, ideal_height_from_width)
    } else if ideal_height_from_height
        <= (slope_from_width * ideal_width_from_height) + max_height_from_width
    {
        Size::new(ideal_width_from_height, ideal_height_from_height)
    } else {
        let denom = slope_from_width - slope_from_height;
        if denom == 0.0 {
            // Parallel constraints: the one closer to the origin decides.
            if max_height_from_height <= max_height_from_width {
                Size::new(ideal_width_from_height, ideal_height_from_height)
            } else {
                Size::new(ideal_width_from_width, ideal_height_from_width)
            }
        } else {
            let w = (max_height_from_height - max_height_from_width) / denom;
            Size::new(w, (slope_from_width * w) + max_height_from_width)
        }
    };

    Size::new(non_negative(size.width), non_negative(size.height))
}

/// A zero output axis forces every child dimension that feeds it to zero; the remaining
/// dimension is bounded by the other axis alone.
fn largest_under_zero_axis(m: Affine, bounds: Size) -> Size {
    let [a, b, c, d, _, _] = m.as_coeffs();
    if !has_inverse(m) || (bounds.width == 0.0 && bounds.height == 0.0) {
        return Size::ZERO;
    }

    if bounds.width == 0.0 {
        match (a == 0.0, c == 0.0) {
            (false, true) => Size::new(0.0, (bounds.height / d).abs()),
            (true, false) => Size::new((bounds.height / b).abs(), 0.0),
            _ => Size::ZERO,
        }
    } else {
        match (b == 0.0, d == 0.0) {
            (true, false) => Size::new((bounds.width / a).abs(), 0.0),
            (false, true) => Size::new(0.0, (bounds.width / c).abs()),
            _ => Size::ZERO,
        }
    }
}

fn non_identity(transform: Option<Affine>) -> Option<Affine> {
    transform
        .map(normalized_linear)
        .filter(|m| !is_identity_linear(*m))
}

fn is_general(m: Affine) -> bool {
    m.as_coeffs()[..4].iter().all(|&v| v != 0.0)
}

fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
