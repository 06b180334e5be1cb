use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::extensions::easing::Smoothing;
use crate::systems::lighting::MAX_LIGHTS;

/// Errors raised while loading or validating a [`PropConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid prop config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("target_max must be positive, got {0}")]
    NonPositiveTargetMax(f32),
    #[error("open_threshold must not be negative, got {0}")]
    NegativeThreshold(f32),
    #[error("{channel} rate must be a finite non-negative number, got {rate}")]
    InvalidRate { channel: &'static str, rate: f32 },
    #[error("light_count {count} exceeds the maximum of {max}")]
    TooManyLights { count: usize, max: usize },
}

/// Static configuration of an openable prop, provided by the owner.
///
/// Loaded once (usually from JSON) and replaced wholesale when the owner
/// wants different settings; the controller never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropConfig {
    /// Openness the prop converges to when opened. Must be positive.
    pub target_max: f32,
    /// Remaining distance to `target_max` under which the prop counts as open.
    pub open_threshold: f32,
    /// Decay rate of the openness channel (1/s).
    pub open_rate: f32,
    /// Decay rate of every emissive light channel (1/s).
    pub glow_rate: f32,
    /// Decay rate of the outline color channel (1/s).
    pub outline_rate: f32,
    /// Light intensity at full glow.
    pub glow_intensity: f32,
    /// Outline RGBA at full outline level. Alpha is scaled by the outline level.
    pub outline_color: [f32; 4],
    /// Number of emissive lights driven by the glow level.
    pub light_count: usize,
    /// How decay rates are turned into per-tick lerp factors.
    pub smoothing: Smoothing,
    /// Place requested from the placement animator on attach.
    pub default_place: String,
    /// Animator parameter receiving normalized openness.
    pub animation_param: String,
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            target_max: 1.0,
            open_threshold: 0.02,
            open_rate: 1.0,
            glow_rate: 3.0,
            outline_rate: 3.0,
            glow_intensity: 50.0,
            outline_color: [200.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0],
            light_count: 1,
            smoothing: Smoothing::Linear,
            default_place: "Default".to_string(),
            animation_param: "normalizedTime".to_string(),
        }
    }
}

impl PropConfig {
    /// Parse and validate a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PropConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_max > 0.0) {
            return Err(ConfigError::NonPositiveTargetMax(self.target_max));
        }
        if !(self.open_threshold >= 0.0) {
            return Err(ConfigError::NegativeThreshold(self.open_threshold));
        }
        for (channel, rate) in [
            ("open", self.open_rate),
            ("glow", self.glow_rate),
            ("outline", self.outline_rate),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRate { channel, rate });
            }
        }
        if self.light_count > MAX_LIGHTS {
            return Err(ConfigError::TooManyLights {
                count: self.light_count,
                max: MAX_LIGHTS,
            });
        }
        Ok(())
    }

    pub fn outline_color(&self) -> Vec4 {
        Vec4::from_array(self.outline_color)
    }

    // -- Builder methods --

    pub fn with_target_max(mut self, target_max: f32) -> Self {
        self.target_max = target_max;
        self
    }

    pub fn with_open_threshold(mut self, threshold: f32) -> Self {
        self.open_threshold = threshold;
        self
    }

    pub fn with_rates(mut self, open: f32, glow: f32, outline: f32) -> Self {
        self.open_rate = open;
        self.glow_rate = glow;
        self.outline_rate = outline;
        self
    }

    pub fn with_light_count(mut self, count: usize) -> Self {
        self.light_count = count;
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// What the owner currently wants from the prop.
///
/// Levels are clamped to [0, 1] on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropIntent {
    intent_open: bool,
    glow_level: f32,
    outline_level: f32,
}

impl PropIntent {
    pub fn new(intent_open: bool, glow_level: f32, outline_level: f32) -> Self {
        Self {
            intent_open,
            glow_level: clamp_level(glow_level),
            outline_level: clamp_level(outline_level),
        }
    }

    pub fn intent_open(&self) -> bool {
        self.intent_open
    }

    pub fn glow_level(&self) -> f32 {
        self.glow_level
    }

    pub fn outline_level(&self) -> f32 {
        self.outline_level
    }

    pub fn set_intent_open(&mut self, open: bool) {
        self.intent_open = open;
    }

    pub fn set_glow_level(&mut self, level: f32) {
        self.glow_level = clamp_level(level);
    }

    pub fn set_outline_level(&mut self, level: f32) {
        self.outline_level = clamp_level(level);
    }
}

#[inline]
fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}
