use crate::{GestureMapper, GestureOutcome, PipelineError, RenderError};
use base::{Tensor, Vec2};
use control::{BrightnessControl, VolumeControl};
use inference::{HandDetector, HandObservation};
use std::fmt;
use video::{Camera, CameraError};

/// Consecutive undecodable frames tolerated before capture counts as failed.
pub const MAX_DECODE_FAILURES: usize = 30;

/// What the renderer needs to annotate one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame_size: Vec2<usize>,
    pub hands: Vec<HandObservation>,
    pub outcome: GestureOutcome,
}

/// Displays frames and polls for the quit request.
pub trait Renderer {
    /// Show `frame` annotated with `report`. Returns `true` to quit.
    fn present(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<bool, RenderError>;

    /// Show the final frame with an exit notice, for about a second.
    fn farewell(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn present(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<bool, RenderError> {
        (**self).present(frame, report)
    }

    fn farewell(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<(), RenderError> {
        (**self).farewell(frame, report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CaptureFailed,
    QuitKey,
    ThumbsTouched,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::CaptureFailed => write!(f, "frame capture failed"),
            StopReason::QuitKey => write!(f, "quit requested"),
            StopReason::ThumbsTouched => write!(f, "thumbs touched"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Continue(FrameReport),
    /// The camera delivered a frame that could not be decoded.
    Skipped,
    Stop(StopReason),
}

/// Capture, detect, map and actuate, one frame at a time on the calling thread.
///
/// Owns every collaborator; all of them are dropped when the loop is.
pub struct ControlLoop<C, D, V, B, R> {
    camera: C,
    detector: D,
    volume: V,
    brightness: B,
    renderer: R,
    mapper: GestureMapper,
    mirror: bool,
    decode_failures: usize,
}

impl<C, D, V, B, R> ControlLoop<C, D, V, B, R>
where
    C: Camera,
    D: HandDetector,
    V: VolumeControl,
    B: BrightnessControl,
    R: Renderer,
{
    pub fn new(
        camera: C,
        detector: D,
        mut volume: V,
        brightness: B,
        renderer: R,
        mapper: GestureMapper,
    ) -> Result<Self, PipelineError> {
        let (min, max) = volume.range()?;
        log::info!("volume range {}..{}", min, max);
        Ok(Self {
            camera,
            detector,
            volume,
            brightness,
            renderer,
            mapper,
            mirror: true,
            decode_failures: 0,
        })
    }

    /// Mirror frames horizontally before detection (selfie view, on by default)
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn step(&mut self) -> Result<Step, PipelineError> {
        let mut frame = match self.camera.capture() {
            Ok(frame) => frame,
            Err(CameraError::Decode(e)) if self.decode_failures < MAX_DECODE_FAILURES => {
                self.decode_failures += 1;
                log::warn!("dropping undecodable frame: {}", e);
                return Ok(Step::Skipped);
            }
            Err(e) => {
                log::warn!("capture failed: {}", e);
                return Ok(Step::Stop(StopReason::CaptureFailed));
            }
        };
        let Some(frame_size) = frame.image_size() else {
            log::warn!("camera returned a non-image tensor {:?}", frame.shape);
            return Ok(Step::Stop(StopReason::CaptureFailed));
        };
        self.decode_failures = 0;

        if self.mirror {
            video::convert::flip_horizontal(&mut frame);
        }

        let hands = match self.detector.detect(&frame) {
            Ok(hands) => hands,
            Err(e) => {
                log::warn!("hand detection failed, skipping frame: {}", e);
                Vec::new()
            }
        };

        let outcome = self.mapper.map(&hands, frame_size);
        if let Some(level) = outcome.volume {
            self.volume.set_level(level)?;
        }
        if let Some(percentage) = outcome.brightness {
            self.brightness.set_percentage(percentage)?;
        }
        log::debug!(
            "hands {} volume {:?} brightness {:?} thumbs {:?}",
            hands.len(),
            outcome.volume,
            outcome.brightness,
            outcome.thumb_distance
        );

        let report = FrameReport {
            frame_size,
            hands,
            outcome,
        };

        if self.renderer.present(&frame, &report)? {
            return Ok(Step::Stop(StopReason::QuitKey));
        }

        if report.outcome.exit {
            log::info!("thumbs touched, exiting");
            self.renderer.farewell(&frame, &report)?;
            return Ok(Step::Stop(StopReason::ThumbsTouched));
        }

        Ok(Step::Continue(report))
    }

    /// Step until a stop condition. Collaborators are released on return.
    pub fn run(mut self) -> Result<StopReason, PipelineError> {
        loop {
            if let Step::Stop(reason) = self.step()? {
                log::info!("stopping: {}", reason);
                return Ok(reason);
            }
        }
    }
}
