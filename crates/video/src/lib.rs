//! Frame capture for the pinch controller.
//!
//! A [`Camera`] hands out one RGB frame per call as `Tensor<u8>` in HWC
//! layout `[height, width, 3]`. Capture is blocking and happens on the
//! calling thread.

pub mod camera;
pub mod config;
pub mod convert;
pub mod error;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use camera::Camera;
pub use config::CameraConfig;
pub use error::CameraError;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
