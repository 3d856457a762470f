// Headless driver: newline-delimited JSON events on stdin drive the engine
use anyhow::Result;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use mouthctl::{
    config, parse_transcript, start_gesture_engine, DesktopExecutor, LandmarkSample, VoiceCommand,
};

/// One event per stdin line: either a landmark sample from the vision
/// collaborator or a transcript from the speech collaborator. Frames with
/// no detected face simply produce no line.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum InputEvent {
    Landmarks(LandmarkSample),
    Transcript { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = config::load_or_default();
    config.validate()?;

    let executor = DesktopExecutor::new(&config);
    let handle = start_gesture_engine(config, Box::new(executor))?;

    let (interrupt_tx, mut interrupt_rx) = tokio::sync::mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.try_send(());
    })?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = interrupt_rx.recv() => {
                log::info!("Interrupt received, shutting down");
                break;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<InputEvent>(line) {
                        Ok(InputEvent::Landmarks(sample)) => handle.submit_sample(sample),
                        Ok(InputEvent::Transcript { text }) => {
                            log::info!("You: {}", text);
                            match parse_transcript(&text) {
                                Some(VoiceCommand::Gesture(command)) => handle.send_command(command),
                                Some(VoiceCommand::Shutdown) => {
                                    log::info!("Voice command: exit");
                                    break;
                                }
                                None => log::debug!("No command matched transcript"),
                            }
                        }
                        Err(e) => log::warn!("Skipping malformed input event: {}", e),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    }

    handle.stop().await;
    Ok(())
}
