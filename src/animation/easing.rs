//! Easing curves for the page-turn envelope.
//!
//! A page turn lasts a fixed window; the curve maps raw progress through that
//! window to the intensity of the mid-turn motion. Arch curves rise and fall
//! back to zero so the extra curl settles once the turn completes.

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for the turn envelope.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Half sine wave: `sin(t·π)`. Zero at both ends, peak 1 at t = 0.5.
    #[default]
    SineArch,
    /// Parabolic arch: `4t(1-t)`. Same endpoints as [`Self::SineArch`] with
    /// a flatter peak.
    ParabolicArch,
    /// Linear ramp (no easing). Leaves residual curl after the turn.
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::SineArch => (t * PI).sin().max(0.0),
            EasingFunction::ParabolicArch => 4.0 * t * (1.0 - t),
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }

    /// Whether the curve returns to zero at t = 1.
    pub fn settles(&self) -> bool {
        matches!(
            self,
            EasingFunction::SineArch | EasingFunction::ParabolicArch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_arch_endpoints_and_peak() {
        let arch = EasingFunction::SineArch;
        assert_eq!(arch.evaluate(0.0), 0.0);
        assert!(arch.evaluate(1.0).abs() < 1e-6);
        assert!((arch.evaluate(0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_parabolic_arch_peak() {
        let arch = EasingFunction::ParabolicArch;
        assert_eq!(arch.evaluate(0.0), 0.0);
        assert_eq!(arch.evaluate(0.5), 1.0);
        assert_eq!(arch.evaluate(1.0), 0.0);
    }

    #[test]
    fn test_input_clamping() {
        let arch = EasingFunction::SineArch;
        assert_eq!(arch.evaluate(-0.5), 0.0);
        assert!(arch.evaluate(1.5).abs() < 1e-6);
        assert_eq!(arch.evaluate(f32::NAN), 0.0);

        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_sine_arch() {
        assert_eq!(EasingFunction::default(), EasingFunction::SineArch);
        assert!(EasingFunction::default().settles());
        assert!(!EasingFunction::Linear.settles());
    }
}
