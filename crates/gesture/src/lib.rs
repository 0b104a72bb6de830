//! Pinch gestures to volume and brightness, and the capture loop around them.

mod error;
mod mapper;
mod pipeline;

pub use error::{PipelineError, RenderError};
pub use mapper::{
    GestureConfig, GestureMapper, GestureOutcome, PINCH_MAX_DISTANCE, PINCH_MIN_DISTANCE,
    PinchReading, THUMBS_TOUCH_PIXEL_THRESHOLD, ThumbPositions, brightness_percentage,
};
pub use pipeline::{ControlLoop, FrameReport, MAX_DECODE_FAILURES, Renderer, Step, StopReason};
