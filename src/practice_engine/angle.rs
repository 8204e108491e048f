//! Reduction of trig operands to a representative angle in degrees.

/// Operands at or below this magnitude are used as degree angles directly.
pub const DIRECT_ANGLE_LIMIT: f64 = 10.0;

/// Reduce `value` to an angle in `[0, 90]` for sin/cos/tan.
///
/// `|value| <= 10` is returned untouched. Larger values are taken modulo 360
/// and folded into the first quadrant:
///
/// | Range after modulo | Result |
/// |--------------------|--------|
/// | `(90, 180]`        | `180 - v` |
/// | `(180, 270]`       | `v - 180` |
/// | `(270, 360)`       | `360 - v` |
///
/// Only the magnitude of the trig value survives the fold; the sign is
/// dropped for every quadrant and every function alike. NaN passes through
/// and infinities become NaN.
pub fn normalize_angle(value: f64) -> f64 {
    if value.is_nan() || value.abs() <= DIRECT_ANGLE_LIMIT {
        return value;
    }
    let mut angle = value % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 90.0 {
        angle = if angle <= 180.0 {
            180.0 - angle
        } else if angle <= 270.0 {
            angle - 180.0
        } else {
            360.0 - angle
        };
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn small_values_pass_through() {
        for v in [-10.0, -3.5, 0.0, 0.25, 7.0, 10.0] {
            assert_eq!(normalize_angle(v), v);
        }
    }

    #[test]
    fn folds_each_quadrant() {
        assert_eq!(normalize_angle(200.0), 20.0);
        assert_eq!(normalize_angle(135.0), 45.0);
        assert_eq!(normalize_angle(300.0), 60.0);
        assert_eq!(normalize_angle(45.0), 45.0);
        assert_eq!(normalize_angle(180.0), 0.0);
        assert_eq!(normalize_angle(270.0), 90.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(740.0), 20.0);
    }

    #[test]
    fn negative_values_wrap_before_folding() {
        // -30 -> 330 -> 30
        assert_eq!(normalize_angle(-30.0), 30.0);
        // -200 -> 160 -> 20
        assert_eq!(normalize_angle(-200.0), 20.0);
    }

    #[test]
    fn large_values_always_land_in_first_quadrant() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let v: f64 = rng.gen_range(-1.0e6..1.0e6);
            let a = normalize_angle(v);
            if v.abs() > DIRECT_ANGLE_LIMIT {
                assert!((0.0..=90.0).contains(&a), "{v} -> {a}");
            } else {
                assert_eq!(a, v);
            }
        }
    }

    #[test]
    fn non_finite_inputs_stay_non_finite() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert!(normalize_angle(f64::INFINITY).is_nan());
        assert!(normalize_angle(f64::NEG_INFINITY).is_nan());
    }
}
