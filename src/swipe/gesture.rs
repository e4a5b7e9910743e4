use super::SwipeDirection;

/// Horizontal travel (in px-equivalent units) past which a released drag
/// commits regardless of speed.
pub const DISTANCE_THRESHOLD: f64 = 150.0;
/// Horizontal speed (units per second) past which a released drag commits
/// regardless of travel.
pub const VELOCITY_THRESHOLD: f64 = 500.0;

/// Turns a finished drag gesture into an optional commit decision.
///
/// Pure policy: a drag commits when it travelled past `DISTANCE_THRESHOLD`
/// or was released faster than `VELOCITY_THRESHOLD`; the direction is the
/// sign of the offset (a zero offset resolves left). Anything below both
/// thresholds is abandoned and the card springs back, which is the
/// renderer's business.
pub fn interpret_drag(offset_x: f64, velocity_x: f64) -> Option<SwipeDirection> {
    if offset_x.abs() > DISTANCE_THRESHOLD || velocity_x.abs() > VELOCITY_THRESHOLD {
        if offset_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn short_slow_drags_are_abandoned() {
        assert_eq!(interpret_drag(0.0, 0.0), None);
        assert_eq!(interpret_drag(149.9, 499.9), None);
        assert_eq!(interpret_drag(-149.9, -499.9), None);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(interpret_drag(DISTANCE_THRESHOLD, 0.0), None);
        assert_eq!(interpret_drag(0.0, VELOCITY_THRESHOLD), None);
        assert_eq!(interpret_drag(DISTANCE_THRESHOLD + 0.1, 0.0), Some(SwipeDirection::Right));
        assert_eq!(interpret_drag(0.0, VELOCITY_THRESHOLD + 0.1), Some(SwipeDirection::Left));
    }

    #[test]
    fn long_drags_commit_in_the_offset_direction() {
        assert_eq!(interpret_drag(200.0, 0.0), Some(SwipeDirection::Right));
        assert_eq!(interpret_drag(-200.0, 0.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn fast_flicks_commit_even_with_little_travel() {
        assert_eq!(interpret_drag(30.0, 800.0), Some(SwipeDirection::Right));
        assert_eq!(interpret_drag(-30.0, -800.0), Some(SwipeDirection::Left));
        // Speed in either direction qualifies; the offset sign still decides.
        assert_eq!(interpret_drag(30.0, -800.0), Some(SwipeDirection::Right));
    }

    proptest! {
        #[test]
        fn interpretation_is_deterministic(offset_x in -2000.0f64..2000.0, velocity_x in -5000.0f64..5000.0) {
            prop_assert_eq!(
                interpret_drag(offset_x, velocity_x),
                interpret_drag(offset_x, velocity_x)
            );
        }

        #[test]
        fn commits_only_past_a_threshold(offset_x in -2000.0f64..2000.0, velocity_x in -5000.0f64..5000.0) {
            if let Some(direction) = interpret_drag(offset_x, velocity_x) {
                prop_assert!(
                    offset_x.abs() > DISTANCE_THRESHOLD || velocity_x.abs() > VELOCITY_THRESHOLD
                );
                match direction {
                    SwipeDirection::Right => prop_assert!(offset_x > 0.0),
                    SwipeDirection::Left => prop_assert!(offset_x <= 0.0),
                }
            }
        }
    }
}
