// extensions/mod.rs
//
// Math helpers shared by the channels.
// Decoupled from the prop controller, usable on their own.

pub mod easing;

pub use easing::{Smoothing, Lerp, lerp, lerp_vec4, sanitize_dt};
