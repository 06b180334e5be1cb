use glam::Vec4;

use crate::api::config::{PropConfig, PropIntent};
use crate::api::sink::{PlaceAnimator, PresentationSink};
use crate::extensions::easing::sanitize_dt;
use crate::input::hover::HoverState;
use crate::input::queue::PropInput;
use crate::systems::interpolation::InterpolationEngine;
use crate::systems::state::{derive_open, PropState};

/// Title and description waiting to be forwarded to the content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingContent {
    title: String,
    description: String,
}

/// An openable prop: smoothed visual channels, a derived open/closed state,
/// and pointer hover capture.
///
/// The owner drives it explicitly:
///
/// ```ignore
/// let mut prop = OpenableProp::new(PropConfig::default());
/// prop.attach(&mut place);
/// prop.set_intent_open(true);
/// prop.tick(dt, &mut place, &mut sink);  // once per frame
/// ```
#[derive(Debug, Clone)]
pub struct OpenableProp {
    config: PropConfig,
    intent: PropIntent,
    engine: InterpolationEngine,
    hover: HoverState,
    content: Option<PendingContent>,
    snap_requested: bool,
    /// Open state seen at the end of the last tick, for edge logging.
    was_open: bool,
}

impl OpenableProp {
    /// Create a closed, dark prop. `config.target_max` must be positive.
    pub fn new(config: PropConfig) -> Self {
        let engine = InterpolationEngine::new(&config);
        Self {
            config,
            intent: PropIntent::default(),
            engine,
            hover: HoverState::new(),
            content: None,
            snap_requested: false,
            was_open: false,
        }
    }

    pub fn config(&self) -> &PropConfig {
        &self.config
    }

    /// Replace the configuration. Channel values are kept.
    pub fn set_config(&mut self, config: PropConfig) {
        if let Err(err) = config.validate() {
            log::warn!("prop config violates a precondition: {}", err);
        }
        self.engine.reconfigure(&config);
        self.config = config;
    }

    /// Request the configured default place from the placement animator.
    pub fn attach(&self, place: &mut impl PlaceAnimator) {
        log::debug!("prop attached at place '{}'", self.config.default_place);
        place.set_place(&self.config.default_place);
    }

    // -- Intent --

    pub fn intent(&self) -> PropIntent {
        self.intent
    }

    pub fn set_intent(&mut self, intent: PropIntent) {
        self.intent = intent;
    }

    pub fn set_intent_open(&mut self, open: bool) {
        self.intent.set_intent_open(open);
    }

    pub fn set_glow_level(&mut self, level: f32) {
        self.intent.set_glow_level(level);
    }

    pub fn set_outline_level(&mut self, level: f32) {
        self.intent.set_outline_level(level);
    }

    /// Queue a title and description for the content panel; sent on the next tick.
    pub fn set_content(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.content = Some(PendingContent {
            title: title.into(),
            description: description.into(),
        });
    }

    // -- Hover --

    pub fn pointer_enter(&mut self) {
        self.hover.pointer_enter();
    }

    pub fn pointer_exit(&mut self) {
        self.hover.pointer_exit();
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    // -- Input --

    /// Apply one host input. `Snap` is deferred to the next tick.
    pub fn apply_input(&mut self, input: PropInput) {
        match input {
            PropInput::PointerEnter => self.pointer_enter(),
            PropInput::PointerExit => self.pointer_exit(),
            PropInput::SetOpen(open) => self.set_intent_open(open),
            PropInput::SetGlow(level) => self.set_glow_level(level),
            PropInput::SetOutline(level) => self.set_outline_level(level),
            PropInput::Snap => self.snap_requested = true,
        }
    }

    /// Apply a batch of inputs in order.
    pub fn apply_inputs(&mut self, inputs: impl IntoIterator<Item = PropInput>) {
        for input in inputs {
            self.apply_input(input);
        }
    }

    // -- Per-frame --

    /// Advance the prop by `dt` seconds and push every output to `sink`.
    ///
    /// The intent is read once at the start, so every channel in this tick
    /// converges toward the same targets. Negative `dt` counts as zero.
    pub fn tick(
        &mut self,
        dt: f32,
        place: &mut impl PlaceAnimator,
        sink: &mut impl PresentationSink,
    ) {
        let clamped = sanitize_dt(dt);
        if clamped != dt {
            log::trace!("clamped tick dt {} to {}", dt, clamped);
        }
        let intent = self.intent;

        if let Some(content) = self.content.take() {
            sink.set_content_text(&content.title, &content.description);
        }

        place.advance(clamped);

        if std::mem::take(&mut self.snap_requested) {
            self.engine.snap(&self.config, &intent);
        } else {
            self.engine.advance(clamped, &self.config, &intent);
        }
        self.publish(sink);
    }

    /// Put every channel on its target now and push the result.
    pub fn snap(&mut self, sink: &mut impl PresentationSink) {
        self.snap_requested = false;
        self.engine.snap(&self.config, &self.intent);
        self.publish(sink);
    }

    fn publish(&mut self, sink: &mut impl PresentationSink) {
        self.engine.push(&self.config, sink);

        let open = self.is_open();
        sink.set_content_visible(open);
        if open != self.was_open {
            log::debug!("prop {:?} at progress {:.3}", PropState::from(open), self.progress());
            self.was_open = open;
        }
    }

    // -- Read-only outputs --

    /// Whether the prop is open: wanted open and close enough to `target_max`.
    /// Evaluated from the current inputs on every call.
    pub fn is_open(&self) -> bool {
        derive_open(
            self.engine.progress(),
            self.config.target_max,
            self.intent.intent_open(),
            self.config.open_threshold,
        )
    }

    pub fn state(&self) -> PropState {
        self.is_open().into()
    }

    /// Raw openness in `0 ..= target_max`.
    pub fn progress(&self) -> f32 {
        self.engine.progress()
    }

    /// Openness in `0 ..= 1`.
    pub fn normalized_progress(&self) -> f32 {
        self.engine.normalized_progress(self.config.target_max)
    }

    pub fn light_intensity(&self, index: usize) -> Option<f32> {
        self.engine.light_intensity(index)
    }

    pub fn outline_color(&self) -> Vec4 {
        self.engine.outline_color()
    }

    /// Whether every channel already sits on its target.
    pub fn is_settled(&self) -> bool {
        self.engine.is_settled(&self.config, &self.intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::sink::StaticPlace;
    use crate::input::queue::InputQueue;

    #[derive(Default)]
    struct Recorder {
        visible: Vec<bool>,
        texts: Vec<(String, String)>,
        params: Vec<f32>,
        lights: Vec<(usize, f32)>,
        outline: Option<Vec4>,
    }

    impl PresentationSink for Recorder {
        fn set_light_intensity(&mut self, index: usize, intensity: f32) {
            self.lights.push((index, intensity));
        }
        fn set_outline_color(&mut self, color: Vec4) {
            self.outline = Some(color);
        }
        fn set_animation_param(&mut self, _name: &str, value: f32) {
            self.params.push(value);
        }
        fn set_content_visible(&mut self, visible: bool) {
            self.visible.push(visible);
        }
        fn set_content_text(&mut self, title: &str, description: &str) {
            self.texts.push((title.to_string(), description.to_string()));
        }
    }

    #[derive(Default)]
    struct PlaceLog {
        places: Vec<String>,
        advanced: f32,
        ticks: usize,
    }

    impl PlaceAnimator for PlaceLog {
        fn set_place(&mut self, name: &str) {
            self.places.push(name.to_string());
        }
        fn advance(&mut self, dt: f32) {
            self.advanced += dt;
            self.ticks += 1;
        }
    }

    #[test]
    fn opens_after_converging() {
        let config = PropConfig::default()
            .with_target_max(1.0)
            .with_open_threshold(0.02)
            .with_rates(1.0, 3.0, 3.0);
        let mut prop = OpenableProp::new(config);
        let mut sink = Recorder::default();
        prop.set_intent_open(true);

        let mut prev = prop.progress();
        let mut opened_at = None;
        for i in 0..100 {
            prop.tick(0.1, &mut StaticPlace, &mut sink);
            let p = prop.progress();
            assert!(p >= prev, "progress went backwards at tick {}", i);
            if prop.is_open() && opened_at.is_none() {
                opened_at = Some(i);
            }
            prev = p;
        }

        // 0.9^n < 0.02 first holds at n = 38.
        assert_eq!(opened_at, Some(37));
        assert_eq!(sink.visible.last(), Some(&true));
    }

    #[test]
    fn dropping_intent_closes_immediately() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.set_intent_open(true);
        let mut sink = Recorder::default();
        prop.snap(&mut sink);
        assert!(prop.is_open());

        prop.set_intent_open(false);
        assert!(!prop.is_open());
        assert_eq!(prop.state(), PropState::Closed);
        // Progress has not moved yet.
        assert_eq!(prop.progress(), 1.0);
    }

    #[test]
    fn mid_opening_close_is_immediate() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.set_intent_open(true);
        prop.tick(0.5, &mut StaticPlace, &mut Recorder::default());
        assert_eq!(prop.progress(), 0.5);

        prop.set_intent_open(false);
        assert!(!prop.is_open());
        assert_eq!(prop.progress(), 0.5);
    }

    #[test]
    fn hover_is_independent() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.pointer_enter();
        prop.pointer_exit();
        prop.pointer_exit();
        assert!(!prop.is_hovered());

        let mut fresh = OpenableProp::new(PropConfig::default());
        fresh.pointer_exit();
        assert!(!fresh.is_hovered());

        fresh.pointer_enter();
        fresh.tick(1.0, &mut StaticPlace, &mut Recorder::default());
        assert!(fresh.is_hovered());
        assert_eq!(fresh.progress(), 0.0);
    }

    #[test]
    fn oversized_light_count_is_capped() {
        use crate::systems::lighting::MAX_LIGHTS;

        let mut prop = OpenableProp::new(PropConfig::default().with_light_count(usize::MAX));
        let mut sink = Recorder::default();
        prop.set_glow_level(1.0);
        prop.snap(&mut sink);
        assert_eq!(prop.light_intensity(MAX_LIGHTS - 1), Some(50.0));
        assert_eq!(prop.light_intensity(MAX_LIGHTS), None);
    }

    #[test]
    fn glow_off_drives_lights_dark() {
        let mut prop = OpenableProp::new(PropConfig::default().with_light_count(2));
        let mut sink = Recorder::default();
        prop.set_glow_level(1.0);
        prop.snap(&mut sink);
        assert_eq!(prop.light_intensity(1), Some(50.0));

        prop.set_glow_level(0.0);
        let mut prev = 50.0;
        for _ in 0..40 {
            prop.tick(0.1, &mut StaticPlace, &mut sink);
            let now = prop.light_intensity(0).unwrap();
            assert!(now < prev);
            prev = now;
        }
        assert!(prev < 0.01);
        assert_eq!(prop.light_intensity(1), prop.light_intensity(0));
    }

    #[test]
    fn outline_alpha_follows_level() {
        let config = PropConfig::default();
        let mut prop = OpenableProp::new(config.clone());
        assert_eq!(prop.outline_color().w, 0.0);

        prop.set_outline_level(0.5);
        prop.snap(&mut Recorder::default());
        let color = prop.outline_color();
        assert_eq!(color.w, 0.5);
        assert_eq!(color.x, config.outline_color[0]);
        assert_eq!(color.y, config.outline_color[1]);
    }

    #[test]
    fn snap_then_tick_is_stable() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.set_intent(PropIntent::new(true, 0.7, 0.3));
        let mut sink = Recorder::default();
        prop.snap(&mut sink);
        assert!(prop.is_settled());

        let before = (prop.progress(), prop.light_intensity(0), prop.outline_color());
        prop.tick(0.016, &mut StaticPlace, &mut sink);
        prop.tick(3.0, &mut StaticPlace, &mut sink);
        assert_eq!(before, (prop.progress(), prop.light_intensity(0), prop.outline_color()));
    }

    #[test]
    fn attach_requests_default_place_and_tick_advances_it() {
        let mut prop = OpenableProp::new(PropConfig::default());
        let mut place = PlaceLog::default();
        prop.attach(&mut place);
        assert_eq!(place.places, vec!["Default".to_string()]);

        prop.tick(0.25, &mut place, &mut Recorder::default());
        prop.tick(-1.0, &mut place, &mut Recorder::default());
        assert_eq!(place.ticks, 2);
        assert_eq!(place.advanced, 0.25);
    }

    #[test]
    fn negative_dt_leaves_channels_alone() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.set_intent(PropIntent::new(true, 1.0, 1.0));
        prop.tick(-0.5, &mut StaticPlace, &mut Recorder::default());
        assert_eq!(prop.progress(), 0.0);
        assert_eq!(prop.light_intensity(0), Some(0.0));
    }

    #[test]
    fn tick_pushes_every_output() {
        let mut prop = OpenableProp::new(PropConfig::default().with_light_count(3));
        let mut sink = Recorder::default();
        prop.set_content("Herbarium", "Pressed flowers");
        prop.tick(0.1, &mut StaticPlace, &mut sink);
        prop.tick(0.1, &mut StaticPlace, &mut sink);

        assert_eq!(sink.texts, vec![("Herbarium".to_string(), "Pressed flowers".to_string())]);
        assert_eq!(sink.visible, vec![false, false]);
        assert_eq!(sink.params.len(), 2);
        assert_eq!(sink.lights.len(), 6);
        assert!(sink.outline.is_some());
    }

    #[test]
    fn queued_inputs_apply_before_tick() {
        let mut prop = OpenableProp::new(PropConfig::default());
        let mut queue = InputQueue::new();
        queue.push(PropInput::PointerEnter);
        queue.push(PropInput::SetOpen(true));
        queue.push(PropInput::SetGlow(0.5));
        queue.push(PropInput::Snap);

        prop.apply_inputs(queue.drain());
        assert!(prop.is_hovered());
        assert_eq!(prop.progress(), 0.0);

        prop.tick(0.0, &mut StaticPlace, &mut Recorder::default());
        assert_eq!(prop.progress(), 1.0);
        assert_eq!(prop.light_intensity(0), Some(25.0));
        assert!(prop.is_open());
    }

    #[test]
    fn set_config_resizes_lights_and_keeps_progress() {
        let mut prop = OpenableProp::new(PropConfig::default());
        prop.set_intent_open(true);
        prop.tick(0.5, &mut StaticPlace, &mut Recorder::default());

        prop.set_config(PropConfig::default().with_light_count(4).with_target_max(2.0));
        assert_eq!(prop.progress(), 0.5);
        assert_eq!(prop.normalized_progress(), 0.25);
        assert_eq!(prop.light_intensity(3), Some(0.0));
        assert_eq!(prop.light_intensity(4), None);
    }
}
