//! Interpolation engine. Advances every visual channel of a prop toward its
//! current target, then pushes the results to a [`PresentationSink`].
//!
//! Channels:
//! - openness: `0 ..= target_max`, chases `target_max` while the owner wants it open
//! - one emissive intensity per light, chasing `glow_level * glow_intensity`
//! - outline RGBA, chasing the configured color with alpha scaled by `outline_level`

use glam::Vec4;

use crate::api::config::{PropConfig, PropIntent};
use crate::api::sink::PresentationSink;
use crate::components::channel::Channel;
use crate::systems::lighting::clamp_light_count;

/// Targets for one tick, computed from a single snapshot of config and intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelTargets {
    pub openness: f32,
    pub light_intensity: f32,
    pub outline_color: Vec4,
}

impl ChannelTargets {
    pub fn from_inputs(config: &PropConfig, intent: &PropIntent) -> Self {
        let mut outline_color = config.outline_color();
        outline_color.w *= intent.outline_level();
        Self {
            openness: if intent.intent_open() { config.target_max } else { 0.0 },
            light_intensity: intent.glow_level() * config.glow_intensity,
            outline_color,
        }
    }
}

/// Owns the channel state of a single prop.
#[derive(Debug, Clone)]
pub struct InterpolationEngine {
    openness: Channel<f32>,
    lights: Vec<Channel<f32>>,
    outline: Channel<Vec4>,
}

impl InterpolationEngine {
    /// Start closed, dark, and with an invisible outline.
    pub fn new(config: &PropConfig) -> Self {
        let mut outline_start = config.outline_color();
        outline_start.w = 0.0;
        let light_count = clamp_light_count(config.light_count);
        Self {
            openness: Channel::new(0.0, config.open_rate),
            lights: vec![Channel::new(0.0, config.glow_rate); light_count],
            outline: Channel::new(outline_start, config.outline_rate),
        }
    }

    /// Apply new rates and light count. Current values are kept;
    /// lights added by a larger count start dark.
    pub fn reconfigure(&mut self, config: &PropConfig) {
        self.openness.set_rate(config.open_rate);
        self.outline.set_rate(config.outline_rate);
        self.lights.resize(
            clamp_light_count(config.light_count),
            Channel::new(0.0, config.glow_rate),
        );
        for light in &mut self.lights {
            light.set_rate(config.glow_rate);
        }
    }

    /// Advance every channel by `dt` seconds. Negative `dt` counts as zero.
    pub fn advance(&mut self, dt: f32, config: &PropConfig, intent: &PropIntent) {
        let targets = ChannelTargets::from_inputs(config, intent);
        let smoothing = config.smoothing;

        self.openness.advance(targets.openness, dt, smoothing);
        for light in &mut self.lights {
            light.advance(targets.light_intensity, dt, smoothing);
        }
        self.outline.advance(targets.outline_color, dt, smoothing);
    }

    /// Put every channel on its target immediately.
    pub fn snap(&mut self, config: &PropConfig, intent: &PropIntent) {
        let targets = ChannelTargets::from_inputs(config, intent);

        self.openness.snap(targets.openness);
        for light in &mut self.lights {
            light.snap(targets.light_intensity);
        }
        self.outline.snap(targets.outline_color);
    }

    /// Send current channel values to the sink.
    pub fn push(&self, config: &PropConfig, sink: &mut impl PresentationSink) {
        let normalized = self.normalized_progress(config.target_max);
        sink.set_animation_param(&config.animation_param, normalized);
        for (index, light) in self.lights.iter().enumerate() {
            sink.set_light_intensity(index, light.current());
        }
        sink.set_outline_color(self.outline.current());
    }

    /// Raw openness in `0 ..= target_max`.
    pub fn progress(&self) -> f32 {
        self.openness.current()
    }

    /// Openness divided by `target_max`. Zero if `target_max` is not positive.
    pub fn normalized_progress(&self, target_max: f32) -> f32 {
        if target_max > 0.0 {
            self.openness.current() / target_max
        } else {
            0.0
        }
    }

    pub fn light_intensity(&self, index: usize) -> Option<f32> {
        self.lights.get(index).map(Channel::current)
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn outline_color(&self) -> Vec4 {
        self.outline.current()
    }

    /// Whether every channel already sits on its target.
    pub fn is_settled(&self, config: &PropConfig, intent: &PropIntent) -> bool {
        let targets = ChannelTargets::from_inputs(config, intent);
        self.openness.is_settled(targets.openness)
            && self.lights.iter().all(|l| l.is_settled(targets.light_intensity))
            && self.outline.is_settled(targets.outline_color)
    }
}
