use prop_engine::{
    FrameBuffer, InputQueue, OpenableProp, PlaceAnimator, PropConfig, PropInput,
};

/// Placement animator backed by the host page.
///
/// Rust only records which place was requested and how much time has been
/// fed to it; the page reads both and moves the prop itself.
#[derive(Debug, Default, Clone)]
pub struct HostPlace {
    place: String,
    elapsed: f32,
}

impl HostPlace {
    /// Last requested place name.
    pub fn place(&self) -> &str {
        &self.place
    }

    /// Seconds advanced since the last place change.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl PlaceAnimator for HostPlace {
    fn set_place(&mut self, name: &str) {
        self.place = name.to_string();
        self.elapsed = 0.0;
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

/// Wires an [`OpenableProp`] to the browser loop.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`, because wasm-bindgen cannot export it directly.
pub struct PropRunner {
    prop: OpenableProp,
    input: InputQueue,
    frame: FrameBuffer,
    place: HostPlace,
    initialized: bool,
}

impl PropRunner {
    pub fn new(config: PropConfig) -> Self {
        let frame = FrameBuffer::new(config.light_count, light_color(&config));
        Self {
            prop: OpenableProp::new(config),
            input: InputQueue::new(),
            frame,
            place: HostPlace::default(),
            initialized: false,
        }
    }

    /// Attach to the default place. Call once after construction.
    pub fn init(&mut self) {
        self.prop.attach(&mut self.place);
        self.frame
            .set_status(self.prop.progress(), self.prop.is_open(), self.prop.is_hovered());
        self.frame.pack();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: PropInput) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, tick the prop, pack the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Inputs first, so the whole tick sees one snapshot
        self.prop.apply_inputs(self.input.drain());
        self.prop.tick(dt, &mut self.place, &mut self.frame);

        self.frame
            .set_status(self.prop.progress(), self.prop.is_open(), self.prop.is_hovered());
        self.frame.pack();
    }

    pub fn set_content(&mut self, title: &str, description: &str) {
        self.prop.set_content(title, description);
    }

    /// Replace the prop configuration. The light section is resized and
    /// recolored to match.
    pub fn set_config(&mut self, config: PropConfig) {
        self.frame.resize_lights(config.light_count, light_color(&config));
        self.prop.set_config(config);
    }

    // ---- Accessors for the page ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.packed().as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.packed().len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.frame.packed()
    }

    pub fn title(&self) -> &str {
        self.frame.title()
    }

    pub fn description(&self) -> &str {
        self.frame.description()
    }

    /// Animator parameter name the normalized progress is reported under.
    pub fn animation_param(&self) -> &str {
        self.frame.animation_param()
    }

    pub fn is_open(&self) -> bool {
        self.prop.is_open()
    }

    pub fn is_hovered(&self) -> bool {
        self.prop.is_hovered()
    }

    pub fn normalized_progress(&self) -> f32 {
        self.prop.normalized_progress()
    }

    pub fn place(&self) -> &HostPlace {
        &self.place
    }
}

/// Lights glow in the outline's RGB.
fn light_color(config: &PropConfig) -> [f32; 3] {
    let [r, g, b, _] = config.outline_color;
    [r, g, b]
}
