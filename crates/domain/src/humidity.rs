//! Target-humidity policy.
//!
//! The vendor accepts target humidity in 5 % steps between 10 % and 60 %.
//! The advertised range is fixed regardless of device capability.

/// Lowest accepted target humidity, percent.
pub const TARGET_HUMIDITY_MIN: u8 = 10;
/// Highest accepted target humidity, percent.
pub const TARGET_HUMIDITY_MAX: u8 = 60;

const ROUND_TO_NEAREST: f64 = 5.0;

/// Round a requested humidity to the nearest 5 % step, then clamp into
/// [`TARGET_HUMIDITY_MIN`]..=[`TARGET_HUMIDITY_MAX`].
///
/// Rounding is half-up (`f64::round`); integer percent requests never land
/// on a half step, so the tie-break only matters for fractional requests.
#[must_use]
pub fn clamp_target_humidity(requested: f64) -> u8 {
    let rounded = (requested / ROUND_TO_NEAREST).round() * ROUND_TO_NEAREST;
    if rounded < f64::from(TARGET_HUMIDITY_MIN) {
        TARGET_HUMIDITY_MIN
    } else if rounded > f64::from(TARGET_HUMIDITY_MAX) {
        TARGET_HUMIDITY_MAX
    } else {
        // In range and a multiple of 5, so the cast is exact.
        rounded as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_to_nearest_step() {
        assert_eq!(clamp_target_humidity(42.0), 40);
        assert_eq!(clamp_target_humidity(43.0), 45);
        assert_eq!(clamp_target_humidity(13.0), 15);
    }

    #[test]
    fn should_clamp_low_requests_up_to_minimum() {
        // 3 rounds to 5, which is below the floor.
        assert_eq!(clamp_target_humidity(3.0), 10);
        assert_eq!(clamp_target_humidity(0.0), 10);
    }

    #[test]
    fn should_clamp_high_requests_down_to_maximum() {
        assert_eq!(clamp_target_humidity(200.0), 60);
        assert_eq!(clamp_target_humidity(62.0), 60);
    }

    #[test]
    fn should_round_half_steps_up() {
        // Only reachable with fractional input; documents the tie-break.
        assert_eq!(clamp_target_humidity(47.5), 50);
        assert_eq!(clamp_target_humidity(12.5), 15);
    }

    #[test]
    fn should_keep_exact_steps_unchanged() {
        assert_eq!(clamp_target_humidity(10.0), 10);
        assert_eq!(clamp_target_humidity(35.0), 35);
        assert_eq!(clamp_target_humidity(60.0), 60);
    }
}
