// Voice command surface - transcript text in, symbolic commands out
pub mod parser;

pub use parser::{parse_transcript, VoiceCommand};
