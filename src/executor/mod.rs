// Action execution - turns symbolic gesture actions into OS side effects
pub mod brightness;
pub mod keys;

use async_trait::async_trait;

use crate::config::GestureConfig;
use crate::gesture::types::GestureAction;
use brightness::{get_brightness_backend, BrightnessBackend};

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("input synthesis failed: {0}")]
    Input(String),
    #[error(transparent)]
    Brightness(#[from] anyhow::Error),
}

/// Executes the symbolic actions the gesture engine emits.
///
/// Failures are reported, never retried here; the engine treats a failed
/// action as emitted and moves on.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    fn name(&self) -> &str;
    async fn execute(&self, action: &GestureAction) -> Result<(), ExecutorError>;
}

/// Default executor: navigation gestures become arrow-key presses,
/// brightness gestures adjust the screen backlight within the configured
/// bounds.
pub struct DesktopExecutor {
    brightness: Box<dyn BrightnessBackend>,
    brightness_min: i32,
    brightness_max: i32,
}

impl DesktopExecutor {
    pub fn new(config: &GestureConfig) -> Self {
        let backend = get_brightness_backend();
        log::info!("Brightness backend: {}", backend.name());
        Self::with_backend(backend, config)
    }

    pub fn with_backend(brightness: Box<dyn BrightnessBackend>, config: &GestureConfig) -> Self {
        Self {
            brightness,
            brightness_min: config.brightness_min,
            brightness_max: config.brightness_max,
        }
    }

    /// The current level is owned by the OS; this only applies the delta
    /// and clamps to the configured bounds.
    fn apply_brightness_delta(&self, delta: i32) -> Result<i32, ExecutorError> {
        let current = self.brightness.current_percent()?;
        let target = (current + delta).clamp(self.brightness_min, self.brightness_max);
        self.brightness.set_percent(target)?;
        Ok(target)
    }
}

#[async_trait]
impl ActionExecutor for DesktopExecutor {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn execute(&self, action: &GestureAction) -> Result<(), ExecutorError> {
        match action {
            GestureAction::BrightnessDelta(delta) => {
                let level = self.apply_brightness_delta(*delta)?;
                log::info!("Brightness adjusted to {}%", level);
            }
            navigation => {
                keys::press_for_action(navigation)?;
            }
        }
        Ok(())
    }
}
