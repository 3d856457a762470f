//! Hands-free desktop control driven by facial mouth gestures.
//!
//! A stream of mouth-landmark samples is interpreted into discrete,
//! debounced actions: arrow-key navigation in one mode, screen-brightness
//! steps in the other. Voice transcripts toggle the mode. The landmark
//! source, speech-to-text, and display layers live outside this crate;
//! it consumes samples and transcripts and emits OS side effects.

pub mod config;
pub mod executor;
pub mod gesture;
pub mod voice;

pub use config::GestureConfig;
pub use executor::{ActionExecutor, DesktopExecutor, ExecutorError};
pub use gesture::{
    get_engine_status, start_gesture_engine, GestureAction, GestureCommand, GestureEngine,
    GestureEngineHandle, LandmarkSample, Mode, MouthPosition, Point2,
};
pub use voice::{parse_transcript, VoiceCommand};
