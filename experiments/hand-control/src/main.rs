mod draw;
mod window;

use control::{PulseVolume, SysfsBacklight};
use gesture::{ControlLoop, GestureMapper};
use inference::{DetectorThresholds, Device, HandLandmarker};
use std::env;
use std::path::PathBuf;
use video::{CameraConfig, V4l2Camera};
use window::MinifbRenderer;

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::var("PINCH_LOG_DIR") {
        Ok(dir) => base::init_file_logger(dir)?,
        Err(_) => base::init_stdout_logger(),
    }

    let camera_device = env_or("PINCH_CAMERA", "/dev/video0");
    let palm_model = PathBuf::from(env_or("PINCH_PALM_MODEL", "models/palm_detection_full.onnx"));
    let landmark_model = PathBuf::from(env_or(
        "PINCH_LANDMARK_MODEL",
        "models/hand_landmark_full.onnx",
    ));
    let backlight = env::var("PINCH_BACKLIGHT").ok();

    log::info!("Hand Gesture Control");
    log::info!("Camera: {}", camera_device);
    log::info!("Palm model: {}", palm_model.display());
    log::info!("Landmark model: {}", landmark_model.display());
    log::info!("Controls: left pinch = volume, right pinch = brightness, touch thumbs or q to exit");

    let camera = V4l2Camera::new(CameraConfig::new(camera_device))?;
    let size = camera.size();
    log::info!("Camera ready at {}x{}", size.x, size.y);

    let detector = HandLandmarker::new(
        palm_model,
        landmark_model,
        Device::Cpu,
        DetectorThresholds::default(),
    )?;
    log::info!("Models loaded");

    let volume = PulseVolume::connect()?;
    let brightness = SysfsBacklight::open(backlight.as_deref())?;
    let renderer = MinifbRenderer::new(size.x, size.y)?;

    let control = ControlLoop::new(
        camera,
        detector,
        volume,
        brightness,
        renderer,
        GestureMapper::default(),
    )?;
    let reason = control.run()?;

    log::info!("Exiting ({})", reason);
    Ok(())
}
