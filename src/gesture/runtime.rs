// src/gesture/runtime.rs
//
// Async service shell around the gesture engine: one task owns all engine
// state, samples and commands cross in over channels.
use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::GestureConfig;
use crate::executor::ActionExecutor;
use crate::gesture::engine::GestureEngine;
use crate::gesture::types::{ActionRecord, EngineStatus, GestureCommand, LandmarkSample};

lazy_static::lazy_static! {
    static ref ENGINE_STATUS: Arc<Mutex<EngineStatus>> = Arc::new(Mutex::new(EngineStatus::default()));
}

/// Snapshot of the running engine for observers (status displays, tests).
pub fn get_engine_status() -> EngineStatus {
    ENGINE_STATUS.lock().unwrap().clone()
}

/// Handle to a running gesture engine task.
pub struct GestureEngineHandle {
    sample_tx: mpsc::Sender<LandmarkSample>,
    command_tx: mpsc::UnboundedSender<GestureCommand>,
    stop_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl GestureEngineHandle {
    /// Submit one landmark sample. The queue holds a single frame; if the
    /// engine is still busy with the previous tick the new frame is
    /// dropped, not queued, so gestures never lag behind the camera.
    pub fn submit_sample(&self, sample: LandmarkSample) {
        match self.sample_tx.try_send(sample) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                ENGINE_STATUS.lock().unwrap().dropped_samples += 1;
                log::trace!("Engine busy, dropping stale frame");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                log::warn!("Gesture engine is not running, sample discarded");
            }
        }
    }

    /// Queue a mode command; it takes effect at the start of the next tick.
    pub fn send_command(&self, command: GestureCommand) {
        if self.command_tx.send(command).is_err() {
            log::warn!("Gesture engine is not running, command discarded");
        }
    }

    /// Stop the engine and wait for its task to finish. After this returns
    /// no further action can be emitted; cooldown and reference are plain
    /// state, so nothing is left pending.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(()).await;
        let _ = self.task.await;
    }
}

/// Spawn the gesture engine on its own task.
///
/// Refuses to start while another engine is running; the status mirror is
/// reset for the new run.
pub fn start_gesture_engine(
    config: GestureConfig,
    executor: Box<dyn ActionExecutor>,
) -> anyhow::Result<GestureEngineHandle> {
    config.validate()?;

    {
        let mut status = ENGINE_STATUS.lock().unwrap();
        if status.is_running {
            anyhow::bail!("Gesture engine already running");
        }
        *status = EngineStatus {
            is_running: true,
            ..EngineStatus::default()
        };
    }

    let (sample_tx, sample_rx) = mpsc::channel::<LandmarkSample>(1);
    let (command_tx, command_rx) = mpsc::unbounded_channel::<GestureCommand>();
    let (stop_tx, stop_rx) = mpsc::channel::<()>(1);

    let engine = GestureEngine::new(&config);
    log::info!(
        "🎥 Gesture engine started in {:?} mode ({} executor)",
        engine.mode(),
        executor.name()
    );

    let task = tokio::spawn(run_gesture_loop(engine, executor, sample_rx, command_rx, stop_rx));

    Ok(GestureEngineHandle {
        sample_tx,
        command_tx,
        stop_tx,
        task,
    })
}

async fn run_gesture_loop(
    mut engine: GestureEngine,
    executor: Box<dyn ActionExecutor>,
    mut sample_rx: mpsc::Receiver<LandmarkSample>,
    mut command_rx: mpsc::UnboundedReceiver<GestureCommand>,
    mut stop_rx: mpsc::Receiver<()>,
) {
    loop {
        let sample = tokio::select! {
            _ = stop_rx.recv() => break,
            maybe_sample = sample_rx.recv() => match maybe_sample {
                Some(sample) => sample,
                None => break,
            },
        };

        // Commands queued since the last tick apply before this sample is
        // interpreted, so the per-frame computation sees one consistent mode.
        while let Ok(command) = command_rx.try_recv() {
            engine.apply_command(command);
        }

        let action = engine.process(&sample, Instant::now());

        {
            let mut status = ENGINE_STATUS.lock().unwrap();
            status.samples_processed += 1;
            status.mode = engine.mode();
            if let Some(action) = action {
                status.actions_emitted += 1;
                status.last_action = Some(ActionRecord {
                    action,
                    timestamp: Utc::now().to_rfc3339(),
                });
            }
        }

        if let Some(action) = action {
            log::info!("Mouth gesture: {}", action.describe());
            if let Err(e) = executor.execute(&action).await {
                // Executor trouble is reported and forgotten; the cooldown
                // stays consumed and the next tick proceeds normally.
                log::warn!("Failed to execute {:?}: {}", action, e);
            }
        }
    }

    ENGINE_STATUS.lock().unwrap().is_running = false;
    log::info!("⏹️ Gesture engine stopped");
}
