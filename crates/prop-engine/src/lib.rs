pub mod api;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, PropConfig, PropIntent};
pub use api::prop::OpenableProp;
pub use api::sink::{PlaceAnimator, PresentationSink, StaticPlace};
pub use components::channel::Channel;
pub use systems::interpolation::{ChannelTargets, InterpolationEngine};
pub use systems::state::{derive_open, derive_state, PropState};
pub use systems::lighting::{EmissiveLight, LightState, LIGHT_FLOATS, MAX_LIGHTS};
pub use input::hover::HoverState;
pub use input::queue::{InputQueue, PropInput};
pub use bridge::protocol::{FrameBuffer, PropFrame, HEADER_FLOATS, PROTOCOL_VERSION};

// Extensions: math shared by the channels
pub use extensions::{Smoothing, Lerp, lerp, lerp_vec4, sanitize_dt};
