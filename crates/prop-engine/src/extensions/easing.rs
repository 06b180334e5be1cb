// extensions/easing.rs
//
// Per-tick smoothing math for interpolation channels.
// No dependencies on props or sinks. Just math.

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// How a decay rate and a tick length turn into a lerp factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
    /// `clamp(dt * rate, 0, 1)`.
    /// Convergence speed depends on the tick rate.
    #[default]
    Linear,
    /// `1 - exp(-rate * dt)`.
    /// Two ticks of `dt` land exactly where one tick of `2 * dt` does.
    Exponential,
}

impl Smoothing {
    /// Lerp factor in [0, 1] for one tick.
    #[inline]
    pub fn factor(self, dt: f32, rate: f32) -> f32 {
        // Also rejects NaN.
        if !(dt > 0.0) || !(rate > 0.0) {
            return 0.0;
        }
        match self {
            Smoothing::Linear => (dt * rate).clamp(0.0, 1.0),
            Smoothing::Exponential => (1.0 - (-rate * dt).exp()).clamp(0.0, 1.0),
        }
    }
}

/// Values a channel can interpolate.
pub trait Lerp: Copy + PartialEq {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp(self, to, t)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp_vec4(self, to, t)
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two RGBA colors, all four components.
#[inline]
pub fn lerp_vec4(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a + (b - a) * t
}

/// Clamp a tick length to something the channels can consume.
/// Negative and NaN values become zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        0.0
    } else {
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn lerp_same_value_is_fixed_point() {
        assert_eq!(lerp(0.3, 0.3, 0.7), 0.3);
        let c = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(lerp_vec4(c, c, 0.9), c);
    }

    #[test]
    fn linear_factor_clamps_at_one() {
        assert_eq!(Smoothing::Linear.factor(0.1, 1.0), 0.1);
        assert_eq!(Smoothing::Linear.factor(10.0, 3.0), 1.0);
        assert_eq!(Smoothing::Linear.factor(f32::INFINITY, 1.0), 1.0);
    }

    #[test]
    fn factor_rejects_bad_input() {
        assert_eq!(Smoothing::Linear.factor(-1.0, 1.0), 0.0);
        assert_eq!(Smoothing::Linear.factor(f32::NAN, 1.0), 0.0);
        assert_eq!(Smoothing::Linear.factor(1.0, 0.0), 0.0);
        assert_eq!(Smoothing::Exponential.factor(1.0, -2.0), 0.0);
    }

    #[test]
    fn exponential_is_rate_independent() {
        let rate = 3.0;
        let one = Smoothing::Exponential.factor(0.2, rate);
        let half = Smoothing::Exponential.factor(0.1, rate);

        // Remaining distance after two half ticks equals one full tick.
        let two_halves = (1.0 - half) * (1.0 - half);
        assert!((two_halves - (1.0 - one)).abs() < 1e-6);
    }

    #[test]
    fn exponential_reaches_one_at_infinity() {
        assert_eq!(Smoothing::Exponential.factor(f32::INFINITY, 1.0), 1.0);
    }

    #[test]
    fn sanitize_dt_clamps_negative() {
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(0.25), 0.25);
    }

    #[test]
    fn smoothing_parses_lowercase() {
        let s: Smoothing = serde_json::from_str("\"exponential\"").unwrap();
        assert_eq!(s, Smoothing::Exponential);
    }
}
