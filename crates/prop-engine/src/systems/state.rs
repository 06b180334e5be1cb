//! State derivation: promotes continuous openness to a discrete open/closed state.
//!
//! Nothing here is stored: the state is recomputed from its inputs on every call.

/// Discrete view of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropState {
    #[default]
    Closed,
    Open,
}

impl PropState {
    pub fn is_open(self) -> bool {
        self == PropState::Open
    }
}

impl From<bool> for PropState {
    fn from(open: bool) -> Self {
        if open {
            PropState::Open
        } else {
            PropState::Closed
        }
    }
}

/// Whether a prop counts as open.
///
/// True only while the owner wants it open AND the remaining distance to
/// `target_max` is strictly below `threshold`. Dropping the intent closes it
/// immediately, whatever the progress.
///
/// `target_max` must be positive (a configuration precondition).
#[inline]
pub fn derive_open(
    progress: f32,
    target_max: f32,
    intent_open: bool,
    threshold: f32,
) -> bool {
    intent_open && (target_max - progress) < threshold
}

/// [`derive_open`] as a [`PropState`].
#[inline]
pub fn derive_state(
    progress: f32,
    target_max: f32,
    intent_open: bool,
    threshold: f32,
) -> PropState {
    derive_open(progress, target_max, intent_open, threshold).into()
}
