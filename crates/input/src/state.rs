use crate::action::Action;
use borehammer_common::MovementInput;

/// Press/release state for the bound actions.
///
/// Two physical keys may map to the same action, so each action keeps a
/// count of keys currently holding it.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    forward: u8,
    backward: u8,
    quit_requested: bool,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a press (`pressed == true`) or release of a key bound to `action`.
    ///
    /// Key repeat should be filtered by the caller; a repeated press would
    /// otherwise need a matching extra release.
    pub fn apply(&mut self, action: Action, pressed: bool) {
        let counter = match action {
            Action::MoveForward => &mut self.forward,
            Action::MoveBackward => &mut self.backward,
            Action::Quit => {
                if pressed {
                    self.quit_requested = true;
                }
                return;
            }
        };
        *counter = if pressed {
            counter.saturating_add(1)
        } else {
            counter.saturating_sub(1)
        };
    }

    /// Movement keys held right now.
    pub fn movement(&self) -> MovementInput {
        MovementInput {
            forward: self.forward > 0,
            backward: self.backward > 0,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drop all held keys, e.g. when the window loses focus and releases
    /// will never arrive.
    pub fn release_all(&mut self) {
        self.forward = 0;
        self.backward = 0;
    }
}
