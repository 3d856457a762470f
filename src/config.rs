// src/config.rs
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunable surface of the gesture engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum interval between two emitted actions, in seconds.
    pub cooldown_secs: f64,
    /// Displacement (normalized image units) a gesture must exceed to fire.
    pub displacement_threshold: f64,
    /// Weight kept on the previous neutral reference per recenter step.
    pub smoothing_weight: f64,
    /// Brightness change per gesture, in percent.
    pub brightness_step: i32,
    pub brightness_min: i32,
    pub brightness_max: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: 0.3,
            displacement_threshold: 0.03,
            smoothing_weight: 0.95,
            brightness_step: 10,
            brightness_min: 0,
            brightness_max: 100,
        }
    }
}

impl GestureConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.cooldown_secs)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cooldown_secs < 0.0 {
            anyhow::bail!("cooldown_secs must be non-negative, got {}", self.cooldown_secs);
        }
        if self.displacement_threshold <= 0.0 {
            anyhow::bail!(
                "displacement_threshold must be positive, got {}",
                self.displacement_threshold
            );
        }
        if !(self.smoothing_weight > 0.0 && self.smoothing_weight < 1.0) {
            anyhow::bail!(
                "smoothing_weight must be strictly between 0 and 1, got {}",
                self.smoothing_weight
            );
        }
        if self.brightness_step <= 0 {
            anyhow::bail!("brightness_step must be positive, got {}", self.brightness_step);
        }
        if self.brightness_min >= self.brightness_max {
            anyhow::bail!(
                "brightness bounds are inverted: [{}, {}]",
                self.brightness_min,
                self.brightness_max
            );
        }
        Ok(())
    }
}

fn get_config_path() -> anyhow::Result<PathBuf> {
    let app_data = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
    let app_dir = app_data.join("mouthctl");

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(app_dir.join("gesture_settings.json"))
}

pub fn save_config(config: &GestureConfig) -> anyhow::Result<()> {
    let config_path = get_config_path()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(config_path, json)?;
    log::info!("💾 Gesture settings saved");
    Ok(())
}

pub fn load_config() -> anyhow::Result<Option<GestureConfig>> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(config_path)?;
    let config: GestureConfig = serde_json::from_str(&json)?;
    log::info!("📂 Gesture settings loaded");
    Ok(Some(config))
}

/// Load the saved config, writing the defaults on first run and falling
/// back to them when the file is unreadable.
pub fn load_or_default() -> GestureConfig {
    match load_config() {
        Ok(Some(config)) => config,
        Ok(None) => {
            let config = GestureConfig::default();
            if let Err(e) = save_config(&config) {
                log::warn!("Could not write default gesture settings: {}", e);
            }
            config
        }
        Err(e) => {
            log::warn!("Failed to load gesture settings, using defaults: {}", e);
            GestureConfig::default()
        }
    }
}
