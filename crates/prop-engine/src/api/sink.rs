use glam::Vec4;

/// Moves the prop between named places in the scene.
///
/// Implemented by the host; the controller only names a place on attach and
/// advances the animator once per tick.
pub trait PlaceAnimator {
    /// Select the place the animator should move toward.
    fn set_place(&mut self, name: &str);

    /// Advance the placement animation by `dt` seconds.
    fn advance(&mut self, dt: f32);
}

/// Receives the prop's visual outputs every tick.
pub trait PresentationSink {
    /// Intensity for light `index` (0-based, < `PropConfig::light_count`).
    fn set_light_intensity(&mut self, index: usize, intensity: f32);

    /// Outline RGBA.
    fn set_outline_color(&mut self, color: Vec4);

    /// Float parameter for the opening animation.
    fn set_animation_param(&mut self, name: &str, value: f32);

    /// Whether the content panel should be shown.
    fn set_content_visible(&mut self, visible: bool);

    /// Title and description for the content panel.
    fn set_content_text(&mut self, _title: &str, _description: &str) {}
}

/// A place animator that ignores every call. For props that never move.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPlace;

impl PlaceAnimator for StaticPlace {
    fn set_place(&mut self, _name: &str) {}

    fn advance(&mut self, _dt: f32) {}
}
