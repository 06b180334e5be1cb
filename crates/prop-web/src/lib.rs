pub mod runner;

pub use runner::{HostPlace, PropRunner};

use std::cell::RefCell;

use prop_engine::{PropConfig, PropInput};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PropRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Returns `R::default()` before `prop_init`.
fn with_runner<R: Default>(f: impl FnOnce(&mut PropRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("prop runner not initialized; call prop_init() first");
            R::default()
        }
    })
}

fn parse_config(json: &str) -> PropConfig {
    if json.trim().is_empty() {
        return PropConfig::default();
    }
    match PropConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}; falling back to defaults", err);
            PropConfig::default()
        }
    }
}

/// Create the runner from a JSON config (empty string for defaults).
#[wasm_bindgen]
pub fn prop_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = PropRunner::new(parse_config(config_json));
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("prop-web: initialized");
}

/// Replace the configuration of a running prop.
#[wasm_bindgen]
pub fn prop_set_config(config_json: &str) {
    let config = parse_config(config_json);
    with_runner(|r| r.set_config(config));
}

#[wasm_bindgen]
pub fn prop_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn prop_pointer_enter() {
    with_runner(|r| r.push_input(PropInput::PointerEnter));
}

#[wasm_bindgen]
pub fn prop_pointer_exit() {
    with_runner(|r| r.push_input(PropInput::PointerExit));
}

#[wasm_bindgen]
pub fn prop_set_open(open: bool) {
    with_runner(|r| r.push_input(PropInput::SetOpen(open)));
}

#[wasm_bindgen]
pub fn prop_set_glow(level: f32) {
    with_runner(|r| r.push_input(PropInput::SetGlow(level)));
}

#[wasm_bindgen]
pub fn prop_set_outline(level: f32) {
    with_runner(|r| r.push_input(PropInput::SetOutline(level)));
}

#[wasm_bindgen]
pub fn prop_snap() {
    with_runner(|r| r.push_input(PropInput::Snap));
}

#[wasm_bindgen]
pub fn prop_set_content(title: &str, description: &str) {
    with_runner(|r| r.set_content(title, description));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.frame_ptr())
    })
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

/// Copy of the last packed frame.
#[wasm_bindgen]
pub fn get_frame() -> js_sys::Float32Array {
    RUNNER.with(|cell| match cell.borrow().as_ref() {
        Some(r) => js_sys::Float32Array::from(r.frame()),
        None => js_sys::Float32Array::new_with_length(0),
    })
}

#[wasm_bindgen]
pub fn get_is_open() -> bool {
    with_runner(|r| r.is_open())
}

#[wasm_bindgen]
pub fn get_is_hovered() -> bool {
    with_runner(|r| r.is_hovered())
}

#[wasm_bindgen]
pub fn get_normalized_progress() -> f32 {
    with_runner(|r| r.normalized_progress())
}

#[wasm_bindgen]
pub fn get_place_name() -> String {
    with_runner(|r| r.place().place().to_string())
}

#[wasm_bindgen]
pub fn get_animation_param() -> String {
    with_runner(|r| r.animation_param().to_string())
}

#[wasm_bindgen]
pub fn get_content_title() -> String {
    with_runner(|r| r.title().to_string())
}

#[wasm_bindgen]
pub fn get_content_description() -> String {
    with_runner(|r| r.description().to_string())
}
