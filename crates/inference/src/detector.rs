use crate::{HandObservation, InferError};
use base::Tensor;

/// Finds hands in an RGB HWC frame.
///
/// An empty result means no hand is visible, not a failure.
pub trait HandDetector {
    fn detect(&mut self, frame: &Tensor<u8>) -> Result<Vec<HandObservation>, InferError>;
}

impl<D: HandDetector + ?Sized> HandDetector for Box<D> {
    fn detect(&mut self, frame: &Tensor<u8>) -> Result<Vec<HandObservation>, InferError> {
        (**self).detect(frame)
    }
}
