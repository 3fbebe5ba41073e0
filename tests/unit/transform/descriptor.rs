use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rotate_matches_kurbo_convention() {
    let [a, b, c, d, e, f] = LayoutTransform::rotate(30.0).to_affine().as_coeffs();
    let (s, co) = 30f64.to_radians().sin_cos();
    assert!(approx(a, co) && approx(b, s) && approx(c, -s) && approx(d, co));
    assert_eq!((e, f), (0.0, 0.0));
}

#[test]
fn skew_places_tangents_off_diagonal() {
    let [a, b, c, d, _, _] = LayoutTransform::skew(5.0, 0.0).to_affine().as_coeffs();
    assert_eq!(a, 1.0);
    assert_eq!(b, 0.0);
    assert!(approx(c, 5f64.to_radians().tan()));
    assert_eq!(d, 1.0);
}

#[test]
fn group_applies_first_child_first() {
    let group = LayoutTransform::Group(vec![
        LayoutTransform::Matrix {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 10.0,
            f: 0.0,
        },
        LayoutTransform::scale(2.0, 2.0),
    ]);
    // translate then scale: (0,0) -> (10,0) -> (20,0)
    let p = group.to_affine() * kurbo::Point::ORIGIN;
    assert_eq!(p, kurbo::Point::new(20.0, 0.0));
}

#[test]
fn converts_into_affine() {
    let t = LayoutTransform::scale(2.0, 3.0);
    let m: Affine = t.clone().into();
    assert_eq!(m, t.to_affine());
    assert_eq!(Affine::from(LayoutTransform::Identity), Affine::IDENTITY);
}

#[test]
fn empty_group_is_identity() {
    assert_eq!(LayoutTransform::Group(vec![]).to_affine(), Affine::IDENTITY);
    assert_eq!(LayoutTransform::default().to_affine(), Affine::IDENTITY);
}

#[test]
fn json_shapes_parse() {
    let t = LayoutTransform::from_json(r#"{ "rotate": { "angle": 45 } }"#).unwrap();
    assert_eq!(t, LayoutTransform::rotate(45.0));

    let t = LayoutTransform::from_json(r#""identity""#).unwrap();
    assert_eq!(t, LayoutTransform::Identity);

    let t = LayoutTransform::from_json(r#"{ "matrix": { "a": 0, "b": 1, "c": 1, "d": 1 } }"#)
        .unwrap();
    assert_eq!(t, LayoutTransform::matrix(0.0, 1.0, 1.0, 1.0));

    let t = LayoutTransform::from_json(
        r#"{ "group": [ { "rotate": { "angle": 45 } }, { "scale": { "x": 3, "y": 3 } } ] }"#,
    )
    .unwrap();
    assert!(matches!(t, LayoutTransform::Group(ref v) if v.len() == 2));
}

#[test]
fn validation_rejects_non_finite_and_vertical_skew() {
    assert!(LayoutTransform::rotate(f64::NAN).validate().is_err());
    assert!(LayoutTransform::scale(1.0, f64::INFINITY).validate().is_err());
    assert!(LayoutTransform::skew(90.0, 0.0).validate().is_err());
    assert!(LayoutTransform::skew(0.0, -270.0).validate().is_err());
    assert!(LayoutTransform::skew(45.0, 0.0).validate().is_ok());
    assert!(
        LayoutTransform::Group(vec![LayoutTransform::rotate(f64::NAN)])
            .validate()
            .is_err()
    );
    // Singular matrices are valid input; the solver degrades them to zero size.
    assert!(LayoutTransform::scale(0.0, 2.0).validate().is_ok());
}

#[test]
fn unknown_variant_is_a_serde_error() {
    let err = LayoutTransform::from_json(r#"{ "shear": {} }"#).unwrap_err();
    assert!(matches!(err, LayoutError::Serde(_)));
}
