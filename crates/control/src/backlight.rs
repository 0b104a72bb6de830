use crate::{BrightnessControl, ControlError};
use std::fs;
use std::path::{Path, PathBuf};

pub const BACKLIGHT_ROOT: &str = "/sys/class/backlight";

/// Backlight driven through the kernel's sysfs class interface.
#[derive(Debug)]
pub struct SysfsBacklight {
    dir: PathBuf,
    max: u32,
}

impl SysfsBacklight {
    /// Open a backlight under `/sys/class/backlight`, the first one when
    /// `device` is `None`.
    pub fn open(device: Option<&str>) -> Result<Self, ControlError> {
        Self::open_in(BACKLIGHT_ROOT, device)
    }

    pub fn open_in(root: impl AsRef<Path>, device: Option<&str>) -> Result<Self, ControlError> {
        let root = root.as_ref();
        let dir = match device {
            Some(name) => root.join(name),
            None => first_device(root)?,
        };

        let raw = fs::read_to_string(dir.join("max_brightness")).map_err(|e| {
            ControlError::Device(format!("cannot read {}: {}", dir.display(), e))
        })?;
        let max = raw.trim().parse::<u32>().map_err(|e| {
            ControlError::Device(format!("invalid max_brightness {:?}: {}", raw.trim(), e))
        })?;
        if max == 0 {
            return Err(ControlError::Device(format!(
                "{} reports max_brightness 0",
                dir.display()
            )));
        }

        log::info!("backlight {} (max {})", dir.display(), max);
        Ok(Self { dir, max })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn max_brightness(&self) -> u32 {
        self.max
    }
}

fn first_device(root: &Path) -> Result<PathBuf, ControlError> {
    let mut entries = fs::read_dir(root)
        .map_err(|e| ControlError::Device(format!("cannot list {}: {}", root.display(), e)))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect::<Vec<_>>();
    entries.sort();
    entries
        .into_iter()
        .next()
        .ok_or_else(|| ControlError::Device(format!("no backlight under {}", root.display())))
}

impl BrightnessControl for SysfsBacklight {
    fn set_percentage(&mut self, percentage: u8) -> Result<(), ControlError> {
        let percentage = percentage.min(100);
        let raw = (percentage as f32 / 100.0 * self.max as f32).round() as u32;
        fs::write(self.dir.join("brightness"), raw.to_string())?;
        log::trace!("brightness {}% -> {}", percentage, raw);
        Ok(())
    }
}
