use super::anchors::{Anchor, palm_anchors};
use super::landmark::{LANDMARK_INPUT_SIZE, LandmarkOutput};
use super::palm::{PALM_INPUT_SIZE, PALM_REGRESSOR_VALUES, decode_palms, non_max_suppression};
use super::roi::Roi;
use super::types::HandObservation;
use crate::{Device, HandDetector, InferError, ModelSource, OnnxSession};
use base::Tensor;

/// Cut-offs applied between the two model stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorThresholds {
    /// Minimum palm score after the sigmoid
    pub palm: f32,
    /// IoU above which overlapping palms are suppressed
    pub nms: f32,
    /// Minimum hand presence score from the landmark model
    pub presence: f32,
    pub max_hands: usize,
}

impl Default for DetectorThresholds {
    fn default() -> Self {
        Self {
            palm: 0.5,
            nms: 0.3,
            presence: 0.5,
            max_hands: 2,
        }
    }
}

impl DetectorThresholds {
    /// Scores and IoU must lie in [0, 1] and at least one hand must be kept.
    pub fn validate(&self) -> Result<(), InferError> {
        for (name, value) in [("palm", self.palm), ("nms", self.nms), ("presence", self.presence)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InferError::Config(format!("{name} threshold {value} outside [0, 1]")));
            }
        }
        if self.max_hands == 0 {
            return Err(InferError::Config("max_hands must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Palm detection followed by hand landmark regression.
pub struct HandLandmarker {
    palm: OnnxSession,
    landmark: OnnxSession,
    anchors: Vec<Anchor>,
    thresholds: DetectorThresholds,
}

impl HandLandmarker {
    /// Thresholds are checked before any model is loaded.
    pub fn new(
        palm_model: impl Into<ModelSource>,
        landmark_model: impl Into<ModelSource>,
        device: Device,
        thresholds: DetectorThresholds,
    ) -> Result<Self, InferError> {
        thresholds.validate()?;
        log::info!("loading hand models on {}", device);
        let palm = OnnxSession::load(palm_model.into(), &device)?;
        let landmark = OnnxSession::load(landmark_model.into(), &device)?;
        Ok(Self {
            palm,
            landmark,
            anchors: palm_anchors(),
            thresholds,
        })
    }

    fn palm_outputs(
        &mut self,
        input: Tensor<f32>,
    ) -> Result<(Tensor<f32>, Tensor<f32>), InferError> {
        let n = self.anchors.len();
        let mut outputs = self.palm.run(input)?;
        let regressors = outputs.iter().position(|t| t.len() == n * PALM_REGRESSOR_VALUES);
        let scores = outputs.iter().position(|t| t.len() == n);
        match (regressors, scores) {
            (Some(r), Some(s)) if r != s => {
                // remove the higher index first so the lower stays valid
                let (first, second) = if r > s {
                    (outputs.swap_remove(r), outputs.swap_remove(s))
                } else {
                    let scores = outputs.swap_remove(s);
                    (outputs.swap_remove(r), scores)
                };
                Ok((first, second))
            }
            _ => Err(InferError::Shape(format!(
                "unexpected palm model outputs {:?}",
                outputs.iter().map(|t| &t.shape).collect::<Vec<_>>()
            ))),
        }
    }
}

impl HandDetector for HandLandmarker {
    fn detect(&mut self, frame: &Tensor<u8>) -> Result<Vec<HandObservation>, InferError> {
        let frame_size = frame
            .image_size()
            .ok_or_else(|| InferError::Shape(format!("expected HWC frame, got {:?}", frame.shape)))?;

        let cover = Roi::covering(frame_size);
        let input = cover.crop(frame, PALM_INPUT_SIZE)?;
        let (regressors, scores) = self.palm_outputs(input)?;
        let palms = decode_palms(&regressors, &scores, &self.anchors, self.thresholds.palm)?
            .iter()
            .map(|palm| palm.to_frame(&cover))
            .collect();
        let palms = non_max_suppression(palms, self.thresholds.nms, self.thresholds.max_hands);
        log::trace!("{} palm(s)", palms.len());

        let mut hands = Vec::with_capacity(palms.len());
        for palm in &palms {
            let roi = Roi::from_palm(palm);
            let crop = roi.crop(frame, LANDMARK_INPUT_SIZE)?;
            let output = LandmarkOutput::from_outputs(&self.landmark.run(crop)?)?;
            if output.presence < self.thresholds.presence {
                log::trace!("dropping hand with presence {:.2}", output.presence);
                continue;
            }
            let (handedness, confidence) = output.handedness();
            hands.push(HandObservation {
                handedness,
                confidence,
                landmarks: output.to_frame(&roi, frame_size),
            });
        }
        Ok(hands)
    }
}
