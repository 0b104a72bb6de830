/// Which device to open and the resolution to ask it for.
///
/// The driver may answer with a different size; the negotiated size is
/// what [`crate::Camera::capture`] reports in the frame shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new("/dev/video0")
    }
}

impl CameraConfig {
    /// 640x480 on `device`.
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            width: 640,
            height: 480,
        }
    }

    pub fn with_device(self, device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..self
        }
    }

    pub fn with_resolution(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
