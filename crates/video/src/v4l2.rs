use crate::{Camera, CameraConfig, CameraError, convert};
use base::{Tensor, Vec2};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

const FPS: u32 = 30;
const BUFFER_COUNT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PixelFormat {
    Jpeg,
    Yuyv,
}

/// V4L2 camera capturing on the calling thread.
///
/// The device and its mmap buffers are acquired in [`V4l2Camera::new`] and
/// released when the camera is dropped.
pub struct V4l2Camera {
    stream: MmapStream<'static>,
    format: PixelFormat,
    size: Vec2<usize>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("stream", &"<v4l::MmapStream>")
            .field("format", &self.format)
            .field("size", &self.size)
            .finish()
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()` and start streaming.
    ///
    /// MJPEG is requested at the configured resolution and 30 fps; devices
    /// that answer with YUYV instead are accepted too.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, rejects
    /// both pixel formats, or refuses the parameters, and
    /// `CameraError::Stream` if the mmap stream cannot be created.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let requested = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let actual = Capture::set_format(&device, &requested)?;
        let format = match &actual.fourcc.repr {
            b"MJPG" => PixelFormat::Jpeg,
            b"YUYV" => PixelFormat::Yuyv,
            _ => {
                return Err(CameraError::Device(format!(
                    "unsupported pixel format: {}",
                    actual.fourcc
                )));
            }
        };
        let size = Vec2::new(actual.width as usize, actual.height as usize);

        let params = v4l::video::capture::Parameters::with_fps(FPS);
        let actual_params = Capture::set_params(&device, &params)?;
        let fps = actual_params.interval.denominator as f32
            / actual_params.interval.numerator.max(1) as f32;

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        log::info!(
            "camera {}: {}x{} {:?} @ {:.1} fps",
            config.device(),
            size.x,
            size.y,
            format,
            fps
        );

        Ok(Self {
            stream,
            format,
            size,
        })
    }

    /// Negotiated frame size.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }
}

impl Camera for V4l2Camera {
    fn capture(&mut self) -> Result<Tensor<u8>, CameraError> {
        let (buffer, metadata) = CaptureStream::next(&mut self.stream)
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        // the driver may hand out a buffer larger than the payload
        let used = (metadata.bytesused as usize).min(buffer.len());
        let data = if used > 0 { &buffer[..used] } else { buffer };

        match self.format {
            PixelFormat::Jpeg => convert::decode_jpeg(data),
            PixelFormat::Yuyv => {
                let rgb = convert::yuyv_to_rgb(data, self.size.x, self.size.y).ok_or_else(|| {
                    CameraError::Decode(format!(
                        "short YUYV frame: {} bytes for {}x{}",
                        data.len(),
                        self.size.x,
                        self.size.y
                    ))
                })?;
                Ok(Tensor::new(vec![self.size.y, self.size.x, 3], rgb)?)
            }
        }
    }
}
