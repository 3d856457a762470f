// Two-state mode machine driven by voice commands only
use crate::gesture::types::{GestureCommand, Mode};

/// Owns which action table is active.
///
/// Gestures never change the mode; only symbolic commands from the voice
/// side do. There is no terminal state, the mode toggles for the lifetime
/// of the engine.
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: Mode::Navigation,
        }
    }

    pub fn apply(&mut self, command: GestureCommand) {
        let next = match command {
            GestureCommand::EnterNavigationMode => Mode::Navigation,
            GestureCommand::ExitNavigationMode => Mode::Brightness,
        };
        if next != self.mode {
            log::info!("Mode changed: {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_navigation_mode() {
        assert_eq!(ModeController::new().mode(), Mode::Navigation);
    }

    #[test]
    fn commands_toggle_the_mode() {
        let mut modes = ModeController::new();
        modes.apply(GestureCommand::ExitNavigationMode);
        assert_eq!(modes.mode(), Mode::Brightness);
        modes.apply(GestureCommand::EnterNavigationMode);
        assert_eq!(modes.mode(), Mode::Navigation);
    }

    #[test]
    fn repeated_commands_are_idempotent() {
        let mut modes = ModeController::new();
        modes.apply(GestureCommand::EnterNavigationMode);
        modes.apply(GestureCommand::EnterNavigationMode);
        assert_eq!(modes.mode(), Mode::Navigation);
    }
}
