use control::{BrightnessControl, ControlError, PulseVolume, VolumeControl};

struct MockVolume {
    levels: Vec<f32>,
}

impl VolumeControl for MockVolume {
    fn set_level(&mut self, level: f32) -> Result<(), ControlError> {
        self.levels.push(level);
        Ok(())
    }

    fn range(&mut self) -> Result<(f32, f32), ControlError> {
        Ok((0.0, 1.0))
    }
}

struct FailingBrightness;

impl BrightnessControl for FailingBrightness {
    fn set_percentage(&mut self, _percentage: u8) -> Result<(), ControlError> {
        Err(ControlError::Io("read-only".to_string()))
    }
}

#[test]
fn test_boxed_volume_control() {
    let mut volume: Box<dyn VolumeControl> = Box::new(MockVolume { levels: Vec::new() });
    volume.set_level(0.5).unwrap();
    assert_eq!(volume.range().unwrap(), (0.0, 1.0));
}

#[test]
fn test_boxed_brightness_control() {
    let mut brightness: Box<dyn BrightnessControl> = Box::new(FailingBrightness);
    let err = brightness.set_percentage(10).unwrap_err();
    assert_eq!(err.to_string(), "io error: read-only");
}

#[test]
fn test_error_from_io() {
    let err: ControlError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert!(matches!(err, ControlError::Io(_)));
}

#[test]
fn test_pulse_volume_connect() {
    // passes with or without a running server
    match PulseVolume::connect() {
        Ok(mut volume) => {
            assert_eq!(volume.range().unwrap(), (0.0, 1.0));
            assert!(!volume.sink().is_empty());
            assert!(matches!(volume.set_level(1.5), Err(ControlError::Range(_))));
            assert!(matches!(volume.set_level(f32::NAN), Err(ControlError::Range(_))));
        }
        Err(err) => assert!(matches!(err, ControlError::Device(_))),
    }
}
