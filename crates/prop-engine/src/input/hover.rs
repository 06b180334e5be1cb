/// Pointer focus over a prop.
///
/// Edge-triggered and last write wins: no debouncing, no counting of
/// overlapping enter/exit pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer moved onto the prop.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// The pointer left the prop.
    pub fn pointer_exit(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_exit() {
        let mut hover = HoverState::new();
        hover.pointer_enter();
        assert!(hover.is_hovered());
        hover.pointer_exit();
        hover.pointer_exit();
        assert!(!hover.is_hovered());
    }

    #[test]
    fn exit_without_enter() {
        let mut hover = HoverState::new();
        hover.pointer_exit();
        assert!(!hover.is_hovered());
    }

    #[test]
    fn last_write_wins() {
        let mut hover = HoverState::new();
        hover.pointer_enter();
        hover.pointer_enter();
        hover.pointer_exit();
        assert!(!hover.is_hovered());
        hover.pointer_exit();
        hover.pointer_enter();
        assert!(hover.is_hovered());
    }
}
