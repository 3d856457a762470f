// Free-text transcript matching for the small voice command surface
use regex::Regex;

use crate::gesture::types::GestureCommand;

/// Commands the transcript parser can produce. Mode commands go to the
/// gesture engine; `Shutdown` is handled by the host and never reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Gesture(GestureCommand),
    Shutdown,
}

lazy_static::lazy_static! {
    static ref MODE_TARGET: Regex = Regex::new(r"\b(shorts?|navigation)\b").unwrap();
    static ref TURN_ON: Regex = Regex::new(r"\b(turn on|open|enable|start)\b").unwrap();
    static ref TURN_OFF: Regex = Regex::new(r"\b(turn off|close|disable|stop|exit)\b").unwrap();
    static ref SHUTDOWN: Regex = Regex::new(r"\b(exit|quit)\b").unwrap();
}

/// Match a transcript against the known phrases.
///
/// Matching is containment-based, so filler words are fine: "please turn
/// on navigation mode" works as well as "turn on shorts".
pub fn parse_transcript(text: &str) -> Option<VoiceCommand> {
    let text = text.to_lowercase();

    if MODE_TARGET.is_match(&text) {
        if TURN_ON.is_match(&text) {
            return Some(VoiceCommand::Gesture(GestureCommand::EnterNavigationMode));
        }
        if TURN_OFF.is_match(&text) {
            return Some(VoiceCommand::Gesture(GestureCommand::ExitNavigationMode));
        }
    }

    if SHUTDOWN.is_match(&text) {
        return Some(VoiceCommand::Shutdown);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_on_phrases_enter_navigation_mode() {
        for text in [
            "turn on shorts",
            "open youtube shorts",
            "please enable navigation mode",
            "Turn On Navigation",
        ] {
            assert_eq!(
                parse_transcript(text),
                Some(VoiceCommand::Gesture(GestureCommand::EnterNavigationMode)),
                "failed for {:?}",
                text
            );
        }
    }

    #[test]
    fn turn_off_phrases_exit_navigation_mode() {
        for text in [
            "turn off shorts",
            "close navigation mode",
            "disable shorts",
            "exit navigation mode",
        ] {
            assert_eq!(
                parse_transcript(text),
                Some(VoiceCommand::Gesture(GestureCommand::ExitNavigationMode)),
                "failed for {:?}",
                text
            );
        }
    }

    #[test]
    fn exit_phrases_shut_down() {
        assert_eq!(parse_transcript("exit"), Some(VoiceCommand::Shutdown));
        assert_eq!(parse_transcript("quit please"), Some(VoiceCommand::Shutdown));
    }

    #[test]
    fn unrelated_text_is_ignored() {
        assert_eq!(parse_transcript("what's the weather like"), None);
        assert_eq!(parse_transcript("turn on the lights"), None);
        // A mode word without an on/off verb is not a command.
        assert_eq!(parse_transcript("I watched some shorts"), None);
    }
}
