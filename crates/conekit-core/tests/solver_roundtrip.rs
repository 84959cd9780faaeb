use conekit_core::{angle_from_dimensions, length_from_angle, support_angle_forward, ConeSpec};
use proptest::prelude::*;

const TOL: f64 = 1e-6;

proptest! {
    /// Solving the angle from dimensions and feeding it back into the
    /// length solver must reproduce the original length.
    #[test]
    fn length_angle_roundtrip(
        large in 1.0f64..500.0,
        delta in 0.1f64..200.0,
        length in 0.1f64..1000.0,
    ) {
        let spec = ConeSpec::new(large + delta, large, length);
        let angle = angle_from_dimensions(&spec).unwrap();
        let back = length_from_angle(spec.large_diameter, spec.small_diameter, angle.alpha_deg)
            .unwrap();
        prop_assert!((back - length).abs() < TOL * length.max(1.0));
    }

    /// The reverse direction: a known angle survives a trip through the
    /// length solver and back.
    #[test]
    fn angle_length_roundtrip(
        large in 1.0f64..500.0,
        delta in 0.1f64..200.0,
        alpha_deg in 0.1f64..179.0,
    ) {
        let small = large;
        let large = large + delta;
        let length = length_from_angle(large, small, alpha_deg).unwrap();
        let spec = ConeSpec::new(large, small, length);
        let angle = angle_from_dimensions(&spec).unwrap();
        prop_assert!((angle.alpha_deg - alpha_deg).abs() < 1e-6 * alpha_deg.max(1.0));
    }

    /// The support angle is exactly half the apex angle, with no rounding.
    #[test]
    fn support_angle_is_half_apex(
        large in 1.0f64..500.0,
        delta in 0.1f64..200.0,
        length in 0.1f64..1000.0,
    ) {
        let spec = ConeSpec::new(large + delta, large, length);
        let alpha = angle_from_dimensions(&spec).unwrap().alpha_deg;
        prop_assert_eq!(support_angle_forward(alpha), alpha / 2.0);
    }

    /// The taper ratio is always defined and positive for a proper cone.
    #[test]
    fn taper_ratio_defined_for_proper_cones(
        large in 1.0f64..500.0,
        delta in 0.1f64..200.0,
        length in 0.1f64..1000.0,
    ) {
        let spec = ConeSpec::new(large + delta, large, length);
        let angle = angle_from_dimensions(&spec).unwrap();
        let k = angle.taper_ratio.unwrap();
        prop_assert!(k > 0.0);
        // k = l / (D - d) by construction
        prop_assert!((k - length / delta).abs() < TOL * k.max(1.0));
    }
}

#[test]
fn reference_cone_scenario() {
    let spec = ConeSpec::new(50.0, 30.0, 100.0);
    let angle = angle_from_dimensions(&spec).unwrap();
    assert!((angle.alpha_deg - 11.42).abs() < 0.01);

    let l = length_from_angle(50.0, 30.0, 30.0).unwrap();
    assert!((l - 37.32).abs() < 0.01);
}
