/// Input events a prop understands.
/// Hosts translate their own pointer/UI events into these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropInput {
    /// The pointer moved onto the prop.
    PointerEnter,
    /// The pointer left the prop.
    PointerExit,
    /// The owner wants the prop open (`true`) or closed (`false`).
    SetOpen(bool),
    /// Desired glow level in [0, 1].
    SetGlow(f32),
    /// Desired outline level in [0, 1].
    SetOutline(f32),
    /// Put every channel on its target right away.
    Snap,
}

/// A queue of input events.
/// The host writes events as they arrive; the owner drains them once per
/// frame, before ticking, so one tick always sees one input snapshot.
pub struct InputQueue {
    events: Vec<PropInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: PropInput) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<PropInput> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &PropInput> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
