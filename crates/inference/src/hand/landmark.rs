use super::roi::Roi;
use super::types::{HAND_LANDMARK_COUNT, Handedness};
use crate::InferError;
use base::{Tensor, Vec2, Vec3};

pub const LANDMARK_INPUT_SIZE: usize = 224;

/// Raw landmark model result for one crop, in crop pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkOutput {
    pub points: [Vec3<f32>; HAND_LANDMARK_COUNT],
    pub presence: f32,
    /// Probability that the crop shows a right hand
    pub right_score: f32,
}

impl LandmarkOutput {
    /// Pick the landmark model outputs by size.
    ///
    /// The first 63-value output holds screen landmarks (a second one, the
    /// world landmarks, is ignored); the scalar outputs are presence then
    /// handedness.
    pub fn from_outputs(outputs: &[Tensor<f32>]) -> Result<Self, InferError> {
        let values = HAND_LANDMARK_COUNT * 3;
        let landmarks = outputs
            .iter()
            .find(|t| t.len() == values)
            .ok_or_else(|| InferError::Shape(format!("no output with {values} landmark values")))?;
        let mut scalars = outputs.iter().filter(|t| t.len() == 1);
        let (presence, handedness) = match (scalars.next(), scalars.next()) {
            (Some(p), Some(h)) => (p.data[0], h.data[0]),
            _ => {
                return Err(InferError::Shape(
                    "expected presence and handedness outputs".to_string(),
                ));
            }
        };

        let points = std::array::from_fn(|i| {
            Vec3::new(
                landmarks.data[i * 3],
                landmarks.data[i * 3 + 1],
                landmarks.data[i * 3 + 2],
            )
        });
        Ok(Self {
            points,
            presence,
            right_score: handedness,
        })
    }

    pub fn handedness(&self) -> (Handedness, f32) {
        if self.right_score > 0.5 {
            (Handedness::Right, self.right_score)
        } else {
            (Handedness::Left, 1.0 - self.right_score)
        }
    }

    /// Landmarks normalized to a frame of `frame_size` pixels.
    pub fn to_frame(
        &self,
        roi: &Roi,
        frame_size: Vec2<usize>,
    ) -> [Vec3<f32>; HAND_LANDMARK_COUNT] {
        let side = LANDMARK_INPUT_SIZE as f32;
        let width = frame_size.x as f32;
        let height = frame_size.y as f32;
        self.points.map(|point| {
            let pixel = roi.project(Vec2::new(point.x / side, point.y / side));
            Vec3::new(pixel.x / width, pixel.y / height, point.z / side * roi.size / width)
        })
    }
}
