//! Hand landmark detection with ONNX Runtime.

mod detector;
mod device;
mod error;
pub mod hand;
mod modelsource;
mod session;

pub use detector::HandDetector;
pub use device::Device;
pub use error::InferError;
pub use hand::{DetectorThresholds, HandLandmark, HandLandmarker, HandObservation, Handedness};
pub use modelsource::ModelSource;
pub use session::{OnnxSession, ndarray_to_tensor, tensor_to_ndarray};
