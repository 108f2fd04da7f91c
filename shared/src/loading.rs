//! Load math shared by every program definition.
//!
//! Every computed target load funnels through [`round_to_plate`] so the
//! prescription is loadable with standard plates (1.25 per side). The
//! 90 % training-max de-rating the wave programs build their percentage
//! tables on lives here too; it is a fixed constant, not a per-user
//! setting.

/// Smallest load increment a prescription may use.
pub const PLATE_INCREMENT: f64 = 2.5;

/// Fraction of a tested 1RM that percentage-based programs train off.
pub const TRAINING_MAX_RATIO: f64 = 0.9;

/// Round a weight to the nearest 2.5-unit increment.
///
/// Non-finite inputs and negative results collapse to 0 so a missing
/// 1RM degrades to a zero-weight prescription instead of an error.
pub fn round_to_plate(weight: f64) -> f64 {
    if !weight.is_finite() {
        return 0.0;
    }
    let rounded = (weight / PLATE_INCREMENT).round() * PLATE_INCREMENT;
    rounded.max(0.0)
}

/// Derive a training max: 90 % of the 1RM, plate-rounded.
pub fn training_max(one_rm: f64) -> f64 {
    round_to_plate(one_rm * TRAINING_MAX_RATIO)
}

/// True if `weight` sits on a 2.5-unit plate boundary.
pub fn is_plate_multiple(weight: f64) -> bool {
    let nearest = (weight / PLATE_INCREMENT).round() * PLATE_INCREMENT;
    (nearest - weight).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounds_to_nearest_increment() {
        assert_eq!(round_to_plate(51.2), 50.0);
        assert_eq!(round_to_plate(51.3), 52.5);
        assert_eq!(round_to_plate(52.5), 52.5);
        assert_eq!(round_to_plate(0.0), 0.0);
    }

    #[test]
    fn negative_and_non_finite_collapse_to_zero() {
        assert_eq!(round_to_plate(-5.0), 0.0);
        assert_eq!(round_to_plate(f64::NAN), 0.0);
        assert_eq!(round_to_plate(f64::INFINITY), 0.0);
    }

    #[test]
    fn training_max_is_ninety_percent_rounded() {
        assert_eq!(training_max(100.0), 90.0);
        assert_eq!(training_max(102.5), 92.5);
        assert_eq!(training_max(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn rounded_weight_is_always_a_plate_multiple(weight in -100.0f64..1000.0) {
            let rounded = round_to_plate(weight);
            prop_assert!(is_plate_multiple(rounded));
            prop_assert!(rounded >= 0.0);
        }

        #[test]
        fn rounding_is_within_half_an_increment(weight in 0.0f64..1000.0) {
            let rounded = round_to_plate(weight);
            prop_assert!((rounded - weight).abs() <= PLATE_INCREMENT / 2.0 + 1e-9);
        }
    }
}
