mod anchors;
mod landmark;
mod landmarker;
mod palm;
mod roi;
mod types;

pub use anchors::{Anchor, PALM_STRIDES, generate_anchors, palm_anchors};
pub use landmark::{LANDMARK_INPUT_SIZE, LandmarkOutput};
pub use landmarker::{DetectorThresholds, HandLandmarker};
pub use palm::{PALM_INPUT_SIZE, PALM_KEYPOINT_COUNT, PalmDetection, decode_palms, non_max_suppression};
pub use roi::{ROI_SCALE, ROI_SHIFT_Y, Roi, normalize_angle};
pub use types::{HAND_CONNECTIONS, HAND_LANDMARK_COUNT, HandLandmark, HandObservation, Handedness};
