use super::anchors::Anchor;
use super::roi::Roi;
use crate::InferError;
use base::{Rect, Tensor, Vec2};

pub const PALM_INPUT_SIZE: usize = 192;
pub const PALM_KEYPOINT_COUNT: usize = 7;
/// Box (4) plus 7 keypoints (14) per anchor
pub const PALM_REGRESSOR_VALUES: usize = 4 + PALM_KEYPOINT_COUNT * 2;
const SCORE_CLIP: f32 = 100.0;

/// A detected palm.
///
/// Coordinates are normalized to the palm model input until mapped with
/// [`PalmDetection::to_frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct PalmDetection {
    pub rect: Rect<f32>,
    pub score: f32,
    /// Wrist, index/middle/ring/pinky MCP, thumb CMC and MCP
    pub keypoints: [Vec2<f32>; PALM_KEYPOINT_COUNT],
}

impl PalmDetection {
    /// Map from the normalized input of an axis-aligned region to frame pixels.
    pub fn to_frame(&self, roi: &Roi) -> PalmDetection {
        let center = roi.project(self.rect.center());
        let size = self.rect.size * roi.size;
        PalmDetection {
            rect: Rect::from_center(center, size),
            score: self.score,
            keypoints: self.keypoints.map(|point| roi.project(point)),
        }
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x.clamp(-SCORE_CLIP, SCORE_CLIP)).exp())
}

/// Decode raw palm model outputs (`regressors [1, N, 18]`, `scores [1, N, 1]`)
/// against their anchors, keeping detections scoring at least `score_threshold`.
pub fn decode_palms(
    regressors: &Tensor<f32>,
    scores: &Tensor<f32>,
    anchors: &[Anchor],
    score_threshold: f32,
) -> Result<Vec<PalmDetection>, InferError> {
    let n = anchors.len();
    if regressors.len() != n * PALM_REGRESSOR_VALUES || scores.len() != n {
        return Err(InferError::Shape(format!(
            "expected [1, {n}, {PALM_REGRESSOR_VALUES}] and [1, {n}, 1], got {:?} and {:?}",
            regressors.shape, scores.shape
        )));
    }

    let scale = PALM_INPUT_SIZE as f32;
    let mut detections = Vec::new();
    for (i, anchor) in anchors.iter().enumerate() {
        let score = sigmoid(scores.data[i]);
        if score < score_threshold {
            continue;
        }

        let raw = &regressors.data[i * PALM_REGRESSOR_VALUES..(i + 1) * PALM_REGRESSOR_VALUES];
        let center = anchor.center + Vec2::new(raw[0], raw[1]) / scale;
        let size = Vec2::new(raw[2], raw[3]) / scale;
        let keypoints = std::array::from_fn(|k| {
            anchor.center + Vec2::new(raw[4 + 2 * k], raw[5 + 2 * k]) / scale
        });

        detections.push(PalmDetection {
            rect: Rect::from_center(center, size),
            score,
            keypoints,
        });
    }
    Ok(detections)
}

/// Greedy non-maximum suppression, highest score first, keeping at most `max_count`.
pub fn non_max_suppression(
    mut detections: Vec<PalmDetection>,
    iou_threshold: f32,
    max_count: usize,
) -> Vec<PalmDetection> {
    detections.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let mut keep: Vec<PalmDetection> = Vec::new();
    for candidate in detections {
        if keep.len() == max_count {
            break;
        }
        if keep
            .iter()
            .all(|kept| kept.rect.iou(candidate.rect) <= iou_threshold)
        {
            keep.push(candidate);
        }
    }
    keep
}
