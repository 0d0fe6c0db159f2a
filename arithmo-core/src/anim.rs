//! Bounded-rate easing toward a target value
//!
//! Used by the presentation layer to slide the question text between
//! its resting positions, one step per main-loop tick.

/// Move `current` toward `target` by at most `max_delta`
///
/// Snaps exactly to `target` once the remaining distance is within
/// `max_delta`, so repeated calls converge without oscillating around
/// the target.
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else if delta > 0.0 {
        current + max_delta
    } else {
        current - max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snap_within_delta() {
        assert_eq!(approach(9.5, 10.0, 1.0), 10.0);
        assert_eq!(approach(10.5, 10.0, 1.0), 10.0);
        assert_eq!(approach(10.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_exact_step_outside_delta() {
        assert_eq!(approach(0.0, 10.0, 2.0), 2.0);
        assert_eq!(approach(10.0, 0.0, 2.0), 8.0);
    }

    #[test]
    fn test_converges_from_entry_position() {
        // 56 -> 28 at 2.0 per tick takes exactly 14 ticks
        let mut y = 56.0;
        let mut ticks = 0;
        while y != 28.0 {
            y = approach(y, 28.0, 2.0);
            ticks += 1;
            assert!(ticks <= 14, "failed to converge");
        }
        assert_eq!(ticks, 14);
    }

    proptest! {
        #[test]
        fn prop_monotone_convergence_without_overshoot(
            current in -500.0f32..500.0,
            target in -500.0f32..500.0,
            max_delta in 0.1f32..50.0,
        ) {
            let mut y = current;
            let start_gap = (target - y).abs();
            for _ in 0..20_000 {
                let next = approach(y, target, max_delta);
                let gap = (target - next).abs();
                // Distance never grows, and the target side is never crossed
                prop_assert!(gap <= (target - y).abs());
                prop_assert!((target - next).signum() == (target - y).signum() || gap == 0.0);
                y = next;
                if y == target {
                    break;
                }
            }
            prop_assert_eq!(y, target);
            prop_assert!((target - y).abs() <= start_gap);
        }
    }
}
