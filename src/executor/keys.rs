// Arrow-key synthesis for navigation gestures
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::executor::ExecutorError;
use crate::gesture::types::GestureAction;

/// Key bound to each navigation action; brightness actions have none.
pub fn key_for_action(action: &GestureAction) -> Option<Key> {
    match action {
        GestureAction::NextItem => Some(Key::RightArrow),
        GestureAction::PreviousItem => Some(Key::LeftArrow),
        GestureAction::ScrollUp => Some(Key::UpArrow),
        GestureAction::ScrollDown => Some(Key::DownArrow),
        GestureAction::BrightnessDelta(_) => None,
    }
}

pub fn press_for_action(action: &GestureAction) -> Result<(), ExecutorError> {
    match key_for_action(action) {
        Some(key) => press_key(key),
        None => Err(ExecutorError::Input(format!(
            "no key binding for {:?}",
            action
        ))),
    }
}

fn press_key(key: Key) -> Result<(), ExecutorError> {
    // One short-lived connection per press; no platform handles are held
    // between actions.
    let mut enigo = Enigo::new(&Settings::default())
        .map_err(|e| ExecutorError::Input(format!("failed to initialize input backend: {}", e)))?;
    enigo
        .key(key, Direction::Click)
        .map_err(|e| ExecutorError::Input(format!("failed to press {:?}: {}", key, e)))?;
    Ok(())
}
