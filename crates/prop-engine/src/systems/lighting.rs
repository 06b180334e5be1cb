//! Emissive lights owned by a prop.
//!
//! The controller only decides intensities; color and count are set up by
//! the host. Each frame the intensities can be read back as a flat buffer.

use bytemuck::{Pod, Zeroable};

/// Floats per light in the wire format.
pub const LIGHT_FLOATS: usize = 4;

/// Upper bound on lights per prop.
pub const MAX_LIGHTS: usize = 64;

/// Clamp a requested light count to [`MAX_LIGHTS`].
pub fn clamp_light_count(count: usize) -> usize {
    if count > MAX_LIGHTS {
        log::warn!("light count {} exceeds {}; clamping", count, MAX_LIGHTS);
        MAX_LIGHTS
    } else {
        count
    }
}

/// A light glowing with the prop.
///
/// Wire format (4 floats / 16 bytes):
/// `[r, g, b, intensity]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct EmissiveLight {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
}

impl EmissiveLight {
    /// Create a dark light of the given RGB color.
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            r: color[0],
            g: color[1],
            b: color[2],
            intensity: 0.0,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

/// The set of lights a prop drives.
pub struct LightState {
    lights: Vec<EmissiveLight>,
    /// Color given to lights added by `resize`.
    default_color: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            default_color: [1.0, 1.0, 1.0],
        }
    }

    /// Create `count` dark lights of one color. `count` is capped at [`MAX_LIGHTS`].
    pub fn with_count(count: usize, color: [f32; 3]) -> Self {
        Self {
            lights: vec![EmissiveLight::new(color); clamp_light_count(count)],
            default_color: color,
        }
    }

    /// Add a light.
    pub fn add(&mut self, light: EmissiveLight) {
        self.lights.push(light);
    }

    /// Grow or shrink to `count` lights (capped at [`MAX_LIGHTS`]). New lights are dark.
    pub fn resize(&mut self, count: usize) {
        self.lights
            .resize(clamp_light_count(count), EmissiveLight::new(self.default_color));
    }

    /// Give every light, and lights added later, a new RGB color.
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.default_color = color;
        for light in &mut self.lights {
            light.r = color[0];
            light.g = color[1];
            light.b = color[2];
        }
    }

    /// Set the intensity of light `index`. Out-of-range indices are ignored.
    pub fn set_intensity(&mut self, index: usize, intensity: f32) {
        match self.lights.get_mut(index) {
            Some(light) => light.intensity = intensity,
            None => log::trace!("light {} out of range ({} lights)", index, self.lights.len()),
        }
    }

    pub fn intensity(&self, index: usize) -> Option<f32> {
        self.lights.get(index).map(|l| l.intensity)
    }

    /// Get an iterator over lights.
    pub fn iter(&self) -> impl Iterator<Item = &EmissiveLight> {
        self.lights.iter()
    }

    /// Number of lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Flat float view of all lights.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lights)
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
