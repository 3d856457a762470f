// In-memory brightness stub for platforms without backlight control
use std::sync::Mutex;

use anyhow::Result;

use crate::executor::brightness::BrightnessBackend;

pub struct SimulatedBrightness {
    level: Mutex<i32>,
}

impl SimulatedBrightness {
    pub fn new() -> Self {
        Self::starting_at(50)
    }

    pub fn starting_at(level: i32) -> Self {
        Self {
            level: Mutex::new(level),
        }
    }
}

impl Default for SimulatedBrightness {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessBackend for SimulatedBrightness {
    fn name(&self) -> &str {
        "simulated"
    }

    fn current_percent(&self) -> Result<i32> {
        Ok(*self.level.lock().unwrap())
    }

    fn set_percent(&self, percent: i32) -> Result<()> {
        *self.level.lock().unwrap() = percent;
        log::info!("Simulated brightness set to {}% - no backlight control on this platform", percent);
        Ok(())
    }
}
