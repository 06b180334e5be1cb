//! Flat frame layout read by the host after every tick.
//! Must stay in sync with the TypeScript reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 12 floats]
//! [Lights: light_count × 4 floats]   r, g, b, intensity
//! ```
//!
//! Booleans are written as 0.0 / 1.0.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use crate::api::sink::PresentationSink;
use crate::systems::lighting::{clamp_light_count, LightState, LIGHT_FLOATS};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Header of a packed frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PropFrame {
    pub protocol_version: f32,
    pub frame_counter: f32,
    pub normalized_progress: f32,
    pub progress: f32,
    pub is_open: f32,
    pub is_hovered: f32,
    pub content_visible: f32,
    pub light_count: f32,
    pub outline: [f32; 4],
}

#[inline]
fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// A [`PresentationSink`] that records everything into a packable frame.
pub struct FrameBuffer {
    header: PropFrame,
    lights: LightState,
    animation_param: String,
    title: String,
    description: String,
    packed: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(light_count: usize, light_color: [f32; 3]) -> Self {
        let light_count = clamp_light_count(light_count);
        Self {
            header: PropFrame {
                protocol_version: PROTOCOL_VERSION,
                ..PropFrame::default()
            },
            lights: LightState::with_count(light_count, light_color),
            animation_param: String::new(),
            title: String::new(),
            description: String::new(),
            packed: Vec::with_capacity(HEADER_FLOATS + light_count * LIGHT_FLOATS),
        }
    }

    /// Grow or shrink the light section and recolor every light.
    pub fn resize_lights(&mut self, count: usize, color: [f32; 3]) {
        self.lights.set_color(color);
        self.lights.resize(count);
    }

    /// Record the read-only status values the sink calls don't carry.
    pub fn set_status(&mut self, progress: f32, is_open: bool, is_hovered: bool) {
        self.header.progress = progress;
        self.header.is_open = flag(is_open);
        self.header.is_hovered = flag(is_hovered);
    }

    /// Pack header and lights into one contiguous buffer and bump the frame counter.
    pub fn pack(&mut self) -> &[f32] {
        self.header.frame_counter += 1.0;
        self.header.light_count = self.lights.count() as f32;

        self.packed.clear();
        self.packed.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&self.header)));
        self.packed.extend_from_slice(self.lights.as_floats());
        &self.packed
    }

    /// The last packed buffer.
    pub fn packed(&self) -> &[f32] {
        &self.packed
    }

    pub fn header(&self) -> &PropFrame {
        &self.header
    }

    pub fn lights(&self) -> &LightState {
        &self.lights
    }

    /// Name of the last animation parameter written.
    pub fn animation_param(&self) -> &str {
        &self.animation_param
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PresentationSink for FrameBuffer {
    fn set_light_intensity(&mut self, index: usize, intensity: f32) {
        self.lights.set_intensity(index, intensity);
    }

    fn set_outline_color(&mut self, color: Vec4) {
        self.header.outline = color.to_array();
    }

    fn set_animation_param(&mut self, name: &str, value: f32) {
        if self.animation_param != name {
            self.animation_param = name.to_string();
        }
        self.header.normalized_progress = value;
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.header.content_visible = flag(visible);
    }

    fn set_content_text(&mut self, title: &str, description: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
    }
}
