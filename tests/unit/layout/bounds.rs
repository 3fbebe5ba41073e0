use super::*;
use crate::LayoutTransform;

fn assert_size(actual: Size, w: f64, h: f64) {
    assert!(
        (actual.width - w).abs() < 1e-9 && (actual.height - h).abs() < 1e-9,
        "expected {w}x{h}, got {actual:?}"
    );
}

#[test]
fn identity_keeps_size() {
    assert_size(compute_transformed_bounds(Affine::IDENTITY, 30.0, 40.0), 30.0, 40.0);
}

#[test]
fn translation_does_not_affect_size() {
    let t = Affine::translate((500.0, -20.0));
    assert_size(compute_transformed_bounds(t, 30.0, 40.0), 30.0, 40.0);
}

#[test]
fn quarter_turns_swap_or_keep_axes() {
    for (angle, w, h) in [
        (90.0, 40.0, 30.0),
        (180.0, 30.0, 40.0),
        (270.0, 40.0, 30.0),
        (360.0, 30.0, 40.0),
    ] {
        let t = LayoutTransform::rotate(angle).to_affine();
        assert_size(compute_transformed_bounds(t, 30.0, 40.0), w, h);
    }
}

#[test]
fn rotated_square_grows_by_sqrt2() {
    let t = LayoutTransform::rotate(45.0).to_affine();
    let s = compute_transformed_bounds(t, 100.0, 100.0);
    assert!((s.width - 100.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    assert!((s.height - 100.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn zero_scale_collapses_without_panicking() {
    let flat_x = Affine::scale_non_uniform(0.0, 2.0);
    assert_size(compute_transformed_bounds(flat_x, 100.0, 100.0), 0.0, 200.0);
    let flat_y = Affine::scale_non_uniform(2.0, 0.0);
    assert_size(compute_transformed_bounds(flat_y, 100.0, 100.0), 200.0, 0.0);
    assert_size(compute_transformed_bounds(Affine::new([0.0; 6]), 100.0, 100.0), 0.0, 0.0);
}

#[test]
fn negative_coefficients_keep_non_negative_extent() {
    let flip = Affine::new([-1.0, 0.0, 0.0, -2.0, 0.0, 0.0]);
    let r = transformed_rect(flip, Size::new(10.0, 5.0));
    assert_eq!(r.x0, -10.0);
    assert_eq!(r.y0, -10.0);
    assert_size(r.size(), 10.0, 10.0);
}

#[test]
fn group_bounds_compose_matrices_not_boxes() {
    let group = LayoutTransform::Group(vec![
        LayoutTransform::rotate(45.0),
        LayoutTransform::scale(3.0, 2.0),
    ]);
    let composed = compute_transformed_bounds(group.to_affine(), 100.0, 50.0);

    let rotated =
        compute_transformed_bounds(LayoutTransform::rotate(45.0).to_affine(), 100.0, 50.0);
    let sequential = compute_transformed_bounds(
        LayoutTransform::scale(3.0, 2.0).to_affine(),
        rotated.width,
        rotated.height,
    );
    assert_size(sequential, composed.width, composed.height);

    // A non-axis-aligned second step is where box-of-box overestimates.
    let group = LayoutTransform::Group(vec![
        LayoutTransform::rotate(45.0),
        LayoutTransform::rotate(-45.0),
    ]);
    let composed = compute_transformed_bounds(group.to_affine(), 100.0, 50.0);
    assert_size(composed, 100.0, 50.0);
    let boxed = compute_transformed_bounds(
        LayoutTransform::rotate(-45.0).to_affine(),
        rotated.width,
        rotated.height,
    );
    assert!(boxed.width > composed.width + 1.0);
    assert!(boxed.height > composed.height + 1.0);
}
