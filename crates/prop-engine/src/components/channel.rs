//! Interpolation channel: one smoothed value chasing a per-tick target.
//!
//! The current value is private: it only moves through [`Channel::advance`]
//! or [`Channel::snap`].

use crate::extensions::easing::{Lerp, Smoothing, sanitize_dt};

/// A value that converges toward a target at a fixed decay rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel<T: Lerp> {
    current: T,
    /// Decay rate in 1/seconds.
    rate: f32,
}

impl<T: Lerp> Channel<T> {
    pub fn new(initial: T, rate: f32) -> Self {
        Self { current: initial, rate }
    }

    /// Current value.
    pub fn current(&self) -> T {
        self.current
    }

    /// Decay rate in 1/seconds.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Move toward `target` by one tick of `dt` seconds. Returns the new value.
    pub fn advance(&mut self, target: T, dt: f32, smoothing: Smoothing) -> T {
        let t = smoothing.factor(sanitize_dt(dt), self.rate);
        self.current = self.current.lerp(target, t);
        self.current
    }

    /// Jump straight to `target`.
    pub fn snap(&mut self, target: T) -> T {
        self.current = target;
        self.current
    }

    /// Whether the channel sits exactly on `target`.
    pub fn is_settled(&self, target: T) -> bool {
        self.current == target
    }
}

impl<T: Lerp + Default> Default for Channel<T> {
    fn default() -> Self {
        Self::new(T::default(), 1.0)
    }
}
