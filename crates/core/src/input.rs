//! Input port - the set of currently held actions.

use crate::types::GameAction;

/// Source of held-action state consumed by the physics tick.
pub trait InputPort {
    /// Whether `action` is held right now.
    fn is_held(&self, action: GameAction) -> bool;

    /// Pull pending events from the device. Must not block.
    fn refresh(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A fixed set of held actions.
impl InputPort for [GameAction] {
    fn is_held(&self, action: GameAction) -> bool {
        self.contains(&action)
    }
}

impl<const N: usize> InputPort for [GameAction; N] {
    fn is_held(&self, action: GameAction) -> bool {
        self.contains(&action)
    }
}

/// No action held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputPort for NoInput {
    fn is_held(&self, _action: GameAction) -> bool {
        false
    }
}
