// Linux backlight control through /sys/class/backlight
use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::executor::brightness::BrightnessBackend;

const BACKLIGHT_ROOT: &str = "/sys/class/backlight";

pub struct SysfsBacklight {
    device: PathBuf,
    max_brightness: u32,
}

impl SysfsBacklight {
    /// Pick the first device under the backlight class. Writes to
    /// `brightness` usually need elevated permissions or a udev rule;
    /// failures surface per-action and are handled by the caller.
    pub fn discover() -> Result<Self> {
        let entry = fs::read_dir(BACKLIGHT_ROOT)?
            .filter_map(|e| e.ok())
            .next()
            .ok_or_else(|| anyhow::anyhow!("no devices under {}", BACKLIGHT_ROOT))?;
        let device = entry.path();

        let max_brightness = read_value(&device.join("max_brightness"))?;
        if max_brightness == 0 {
            anyhow::bail!("{} reports max_brightness 0", device.display());
        }

        Ok(Self {
            device,
            max_brightness,
        })
    }
}

fn read_value(path: &std::path::Path) -> Result<u32> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.trim().parse::<u32>()?)
}

impl BrightnessBackend for SysfsBacklight {
    fn name(&self) -> &str {
        "sysfs-backlight"
    }

    fn current_percent(&self) -> Result<i32> {
        let raw = read_value(&self.device.join("brightness"))?;
        let percent = (f64::from(raw) / f64::from(self.max_brightness) * 100.0).round();
        Ok(percent as i32)
    }

    fn set_percent(&self, percent: i32) -> Result<()> {
        let raw = (f64::from(percent) / 100.0 * f64::from(self.max_brightness)).round() as u32;
        fs::write(self.device.join("brightness"), raw.to_string())?;
        Ok(())
    }
}
