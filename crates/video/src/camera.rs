use crate::CameraError;
use base::Tensor;

/// Blocking frame source.
pub trait Camera {
    /// Capture the next frame as `Tensor<u8>` with shape `[height, width, 3]`.
    ///
    /// `CameraError::Decode` spoils only this frame and the next call may
    /// succeed. Any other error means the source is gone.
    fn capture(&mut self) -> Result<Tensor<u8>, CameraError>;
}

impl<C: Camera + ?Sized> Camera for Box<C> {
    fn capture(&mut self) -> Result<Tensor<u8>, CameraError> {
        (**self).capture()
    }
}
