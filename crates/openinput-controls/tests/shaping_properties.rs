//! Property tests for the analog shaping math.

use openinput_controls::shaping::{
    apply_circular_dead_zone, apply_dead_zone, apply_smoothing, inverse_lerp, move_towards,
};
use proptest::prelude::*;

proptest! {
    /// Inside the lower dead zone the shaped value is exactly zero.
    #[test]
    fn dead_zone_collapses_lower_band(
        value in -0.2f32..=0.2f32,
    ) {
        let shaped = apply_dead_zone(value, 0.2, 0.9);
        prop_assert_eq!(shaped, 0.0);
    }

    /// At or beyond the upper bound the shaped magnitude saturates to one.
    #[test]
    fn dead_zone_saturates_upper_band(
        magnitude in 0.9f32..=1.0f32,
        negative in any::<bool>(),
    ) {
        let value = if negative { -magnitude } else { magnitude };
        let shaped = apply_dead_zone(value, 0.2, 0.9);
        prop_assert!((shaped.abs() - 1.0).abs() < 1.0e-6);
    }

    /// Shaping preserves sign and stays within [-1, 1].
    #[test]
    fn dead_zone_bounded_and_sign_preserving(
        value in -1.0f32..=1.0f32,
        lower in 0.0f32..0.4f32,
        width in 0.1f32..0.6f32,
    ) {
        let upper = (lower + width).min(1.0);
        let shaped = apply_dead_zone(value, lower, upper);
        prop_assert!(shaped.abs() <= 1.0 + 1.0e-6);
        prop_assert!(shaped * value >= 0.0);
    }

    /// Circular dead zone is isotropic: equal raw magnitudes remap to equal
    /// shaped magnitudes at every angle.
    #[test]
    fn circular_dead_zone_isotropy(
        magnitude in 0.05f32..=1.0f32,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let (x, y) = (magnitude * angle.cos(), magnitude * angle.sin());
        let sx = apply_circular_dead_zone(x, y, 0.2, 0.9);
        let sy = apply_circular_dead_zone(y, x, 0.2, 0.9);
        let shaped_magnitude = (sx * sx + sy * sy).sqrt();

        let reference = apply_circular_dead_zone(magnitude, 0.0, 0.2, 0.9);
        prop_assert!(
            (shaped_magnitude - reference.abs()).abs() < 1.0e-3,
            "magnitude {} at angle {} remapped to {}, axial reference {}",
            magnitude, angle, shaped_magnitude, reference
        );
    }

    /// Smoothing with unit sensitivity is the identity on the target.
    #[test]
    fn smoothing_instant_path(
        target in -1.0f32..=1.0f32,
        last in -1.0f32..=1.0f32,
        dt in 0.001f32..=0.1f32,
    ) {
        prop_assert_eq!(apply_smoothing(target, last, dt, 1.0), target);
    }

    /// Smoothing never moves further than the per-tick rate limit.
    #[test]
    fn smoothing_never_overshoots(
        target in -1.0f32..=1.0f32,
        last in -1.0f32..=1.0f32,
        dt in 0.001f32..=0.1f32,
        sensitivity in 0.01f32..=0.99f32,
    ) {
        let out = apply_smoothing(target, last, dt, sensitivity);
        let max_delta = dt * sensitivity * 100.0;
        // The base snaps to zero on sign reversal (zero counts as positive),
        // so measure the step from that base.
        let base = if (last >= 0.0) == (target >= 0.0) { last } else { 0.0 };
        prop_assert!(
            (out - base).abs() <= max_delta + 1.0e-5,
            "moved {} from base {} with limit {}",
            (out - base).abs(), base, max_delta
        );
    }

    /// `move_towards` lands on the target exactly once within reach.
    #[test]
    fn move_towards_reaches_target(
        current in -1.0f32..=1.0f32,
        target in -1.0f32..=1.0f32,
    ) {
        let out = move_towards(current, target, 2.1);
        prop_assert_eq!(out, target);
    }

    /// `inverse_lerp` output is always within [0, 1].
    #[test]
    fn inverse_lerp_clamped(
        lower in 0.0f32..0.5f32,
        width in 0.01f32..0.5f32,
        value in -2.0f32..=2.0f32,
    ) {
        let out = inverse_lerp(lower, lower + width, value);
        prop_assert!((0.0..=1.0).contains(&out));
    }
}
