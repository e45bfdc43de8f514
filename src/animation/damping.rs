//! Frame-rate independent damping toward a target.
//!
//! All functions here are pure: the caller owns the current value and feeds
//! it back in next frame. The approach is an exponential decay of the gap,
//! so a value never crosses its target and a longer frame simply takes a
//! larger bite of the remaining distance.

use std::f32::consts::{PI, TAU};

/// Gaps at or below this snap straight to the target.
pub const SNAP_EPSILON: f32 = 0.001;

/// Lower bound on the smoothing time to keep `2 / smooth_time` finite.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Polynomial approximation of `e^-x`, accurate enough for animation and
/// cheaper than `exp`.
#[inline]
fn decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Move `current` toward `target`.
///
/// `smooth_time` is roughly the time (in the same unit as `delta`) to cover
/// most of the gap; `delta` is the elapsed time since the previous call.
/// A non-positive or non-finite `delta` leaves the value unchanged.
#[inline]
pub fn damp(current: f32, target: f32, smooth_time: f32, delta: f32) -> f32 {
    if (current - target).abs() <= SNAP_EPSILON {
        return target;
    }
    if !delta.is_finite() || delta <= 0.0 {
        return current;
    }
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let next = target + (current - target) * decay(omega * delta);
    if (next - target).abs() <= SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// Wrap an angle (radians) into `(-π, π]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// [`damp`] for angles: approaches `target` along the shorter arc.
#[inline]
pub fn damp_angle(
    current: f32,
    target: f32,
    smooth_time: f32,
    delta: f32,
) -> f32 {
    let gap = wrap_angle(target - current);
    if gap.abs() <= SNAP_EPSILON {
        return target;
    }
    let next = damp(current, current + gap, smooth_time, delta);
    if next == current + gap {
        target
    } else {
        next
    }
}

/// Plain linear interpolation, `a + (b - a)·t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn zero_delta_is_identity() {
        assert_eq!(damp(0.0, 1.0, 0.6, 0.0), 0.0);
        assert_eq!(damp(0.0, 1.0, 0.6, -1.0), 0.0);
        assert_eq!(damp(0.0, 1.0, 0.6, f32::NAN), 0.0);
    }

    #[test]
    fn never_overshoots_rising_target() {
        let mut v = 0.0;
        for _ in 0..600 {
            let next = damp(v, 1.0, 0.3, DT);
            assert!(next >= v, "damp moved away from target");
            assert!(next <= 1.0, "damp overshot: {next}");
            v = next;
        }
        assert_eq!(v, 1.0);
    }

    #[test]
    fn never_overshoots_falling_target_with_large_steps() {
        let mut v = 2.0;
        for _ in 0..50 {
            let next = damp(v, -1.0, 0.1, 0.5);
            assert!(next >= -1.0);
            assert!(next <= v);
            v = next;
        }
        assert_eq!(v, -1.0);
    }

    #[test]
    fn converges_within_bounded_frames() {
        let mut v = 0.0_f32;
        let mut frames = 0;
        while (v - 1.5).abs() > 1e-3 {
            v = damp(v, 1.5, 0.6, DT);
            frames += 1;
            assert!(frames < 1000, "did not converge");
        }
    }

    #[test]
    fn frame_rate_independent_within_tolerance() {
        let mut fast = 0.0;
        for _ in 0..120 {
            fast = damp(fast, 1.0, 0.6, 1.0 / 120.0);
        }
        let mut slow = 0.0;
        for _ in 0..30 {
            slow = damp(slow, 1.0, 0.6, 1.0 / 30.0);
        }
        assert!((fast - slow).abs() < 0.02, "fast={fast} slow={slow}");
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-TAU - 0.5) + 0.5).abs() < 1e-5);
        assert!((wrap_angle(PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
    }

    #[test]
    fn damp_angle_takes_short_arc() {
        // From just below +π to just above -π is a short hop across the seam.
        let current = PI - 0.1;
        let target = -PI + 0.1;
        let next = damp_angle(current, target, 0.3, DT);
        assert!(next > current, "should move forward across the seam");
    }

    #[test]
    fn damp_angle_settles_on_target() {
        let mut v = 0.0;
        for _ in 0..600 {
            v = damp_angle(v, -1.2, 0.6, DT);
        }
        assert_eq!(v, -1.2);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    }
}
