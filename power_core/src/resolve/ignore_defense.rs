//! Multiplicative-complement combination for ignore-defense rates
//!
//! Ignore-defense contributions never add; each source is folded through its
//! miss-complement so the combined rate stays below 100 for inputs below 100.
//! Signed values are handled asymmetrically on purpose: a gain multiplies the
//! complement by `1 - v/100`, a loss divides it by `1 + v/100`. Raising the
//! rate has diminishing returns while lowering it is amplified, and the two
//! directions are not mirror images.

/// Fold one signed rate increment into a running aggregate. Both are percent.
pub fn fold_rate(aggregate: f64, value: f64) -> f64 {
    let complement = 1.0 - aggregate / 100.0;
    let folded = if value > 0.0 {
        1.0 - complement * (1.0 - value / 100.0)
    } else {
        1.0 - complement / (1.0 + value / 100.0)
    };
    folded * 100.0
}

/// Complement factor contributed by a hypothetical delta (percent)
pub fn delta_factor(value: f64) -> f64 {
    if value > 0.0 {
        1.0 - value / 100.0
    } else {
        1.0 / (1.0 + value / 100.0)
    }
}

/// Combine the sheet rate, the pre-folded buff aggregate and a hypothetical
/// delta into the final ignore-defense percentage.
pub fn combine(character_rate: f64, buffs_rate: f64, delta: f64) -> f64 {
    let complement =
        (1.0 - character_rate / 100.0) * (1.0 - buffs_rate / 100.0) * delta_factor(delta);
    (1.0 - complement) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_inputs_combine_to_zero() {
        assert_eq!(combine(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_positive_delta_uses_complement_multiply() {
        // complement 0.5 * 0.9 = 0.45 -> 55%
        assert!((combine(50.0, 0.0, 10.0) - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_delta_uses_complement_divide() {
        // complement 0.5 / 0.9 = 0.5555... -> 44.44%
        let rate = combine(50.0, 0.0, -10.0);
        assert!((rate - 44.444444444444444).abs() < 1e-9);
    }

    #[test]
    fn test_sign_asymmetry_is_not_a_mirror() {
        let up = combine(50.0, 0.0, 10.0);
        let down = combine(50.0, 0.0, -10.0);
        // +10 moves the rate by 5 points, -10 moves it by 5.56; the fold is
        // intentionally asymmetric around the starting rate.
        assert!((up - 50.0) < (50.0 - down));
    }

    #[test]
    fn test_incremental_fold_matches_combine() {
        let folded = fold_rate(fold_rate(0.0, 20.0), 20.0);
        assert!((folded - 36.0).abs() < 1e-9);
        assert!((combine(20.0, 20.0, 0.0) - 36.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_combine_bounded_by_inputs(r1 in 0.0f64..100.0, r2 in 0.0f64..100.0) {
            let rate = combine(r1, r2, 0.0);
            prop_assert!(rate >= r1.max(r2) - 1e-9);
            prop_assert!(rate < 100.0);
        }

        #[test]
        fn prop_fold_never_reaches_hundred(r1 in 0.0f64..100.0, r2 in 0.0f64..100.0) {
            let rate = fold_rate(r1, r2);
            prop_assert!(rate >= r1.max(r2) - 1e-9);
            prop_assert!(rate < 100.0);
        }
    }
}
