//! System output controls driven by a normalized level.

mod backlight;
mod error;
mod pulse;

pub use backlight::{BACKLIGHT_ROOT, SysfsBacklight};
pub use error::ControlError;
pub use pulse::PulseVolume;

/// Output volume, as a level in [0.0, 1.0].
pub trait VolumeControl {
    fn set_level(&mut self, level: f32) -> Result<(), ControlError>;

    /// Supported level range; callers only log it.
    fn range(&mut self) -> Result<(f32, f32), ControlError>;
}

/// Screen brightness, as a percentage in [0, 100].
pub trait BrightnessControl {
    fn set_percentage(&mut self, percentage: u8) -> Result<(), ControlError>;
}

impl<V: VolumeControl + ?Sized> VolumeControl for Box<V> {
    fn set_level(&mut self, level: f32) -> Result<(), ControlError> {
        (**self).set_level(level)
    }

    fn range(&mut self) -> Result<(f32, f32), ControlError> {
        (**self).range()
    }
}

impl<B: BrightnessControl + ?Sized> BrightnessControl for Box<B> {
    fn set_percentage(&mut self, percentage: u8) -> Result<(), ControlError> {
        (**self).set_percentage(percentage)
    }
}
