// Platform-specific screen brightness backends
use anyhow::Result;

#[cfg(target_os = "linux")]
pub mod linux;

pub mod simulated;

/// Platform-agnostic brightness interface. Levels are whole percents; the
/// OS side owns the actual value, callers only read and write it.
pub trait BrightnessBackend: Send + Sync {
    fn name(&self) -> &str;
    fn current_percent(&self) -> Result<i32>;
    fn set_percent(&self, percent: i32) -> Result<()>;
}

// Factory function to get the appropriate backend
pub fn get_brightness_backend() -> Box<dyn BrightnessBackend> {
    #[cfg(target_os = "linux")]
    {
        match linux::SysfsBacklight::discover() {
            Ok(backend) => return Box::new(backend),
            Err(e) => {
                log::warn!("No usable sysfs backlight ({}), falling back to simulated brightness", e);
            }
        }
    }

    Box::new(simulated::SimulatedBrightness::new())
}
