use super::palm::PalmDetection;
use crate::InferError;
use base::{Tensor, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Scale from palm box to hand region
pub const ROI_SCALE: f32 = 2.6;
/// Center shift along the rotated y axis, in units of the palm box height
pub const ROI_SHIFT_Y: f32 = -0.5;

/// A rotated square region of a frame, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roi {
    pub center: Vec2<f32>,
    /// Side length
    pub size: f32,
    /// Radians; positive turns the region's +x axis toward frame +y
    pub rotation: f32,
}

impl Roi {
    /// Axis-aligned square centered on the frame, padded to the longer side.
    pub fn covering(frame_size: Vec2<usize>) -> Self {
        let size = Vec2::<f32>::from(frame_size);
        Self {
            center: size / 2.0,
            size: size.x.max(size.y),
            rotation: 0.0,
        }
    }

    /// Hand region for a palm: rotated so the wrist to middle finger axis
    /// points up, shifted toward the fingers and enlarged to hold the hand.
    pub fn from_palm(palm: &PalmDetection) -> Self {
        let wrist = palm.keypoints[0];
        let middle = palm.keypoints[2];
        let rotation = normalize_angle(FRAC_PI_2 - (wrist.y - middle.y).atan2(middle.x - wrist.x));

        let height = palm.rect.size.y;
        let center = palm.rect.center() + Vec2::new(0.0, ROI_SHIFT_Y * height).rotated(rotation);
        Self {
            center,
            size: palm.rect.size.x.max(height) * ROI_SCALE,
            rotation,
        }
    }

    /// Map a point normalized to the region ([0, 1] on both axes) to frame pixels.
    pub fn project(&self, point: Vec2<f32>) -> Vec2<f32> {
        self.center + ((point - Vec2::new(0.5, 0.5)) * self.size).rotated(self.rotation)
    }

    /// Sample the region into a `[1, side, side, 3]` NHWC tensor in [0, 1].
    ///
    /// Bilinear; samples outside the frame read as black.
    pub fn crop(&self, frame: &Tensor<u8>, side: usize) -> Result<Tensor<f32>, InferError> {
        let size = match frame.shape.as_slice() {
            [h, w, 3] => Vec2::new(*w, *h),
            other => {
                return Err(InferError::Shape(format!(
                    "expected an RGB HWC frame, got shape {:?}",
                    other
                )));
            }
        };

        let mut data = Vec::with_capacity(side * side * 3);
        for v in 0..side {
            for u in 0..side {
                let point = Vec2::new(
                    (u as f32 + 0.5) / side as f32,
                    (v as f32 + 0.5) / side as f32,
                );
                let pixel = sample_bilinear(&frame.data, size, self.project(point));
                data.extend(pixel.iter().map(|c| c / 255.0));
            }
        }
        Ok(Tensor::new(vec![1, side, side, 3], data)?)
    }
}

/// Wrap an angle into [-PI, PI).
pub fn normalize_angle(angle: f32) -> f32 {
    angle - 2.0 * PI * ((angle + PI) / (2.0 * PI)).floor()
}

// pixel centers sit at integer + 0.5
fn sample_bilinear(data: &[u8], size: Vec2<usize>, at: Vec2<f32>) -> [f32; 3] {
    let fx = at.x - 0.5;
    let fy = at.y - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;

    let texel = |x: f32, y: f32| -> [f32; 3] {
        if x < 0.0 || y < 0.0 || x >= size.x as f32 || y >= size.y as f32 {
            return [0.0; 3];
        }
        let i = (y as usize * size.x + x as usize) * 3;
        [data[i] as f32, data[i + 1] as f32, data[i + 2] as f32]
    };

    let a = texel(x0, y0);
    let b = texel(x0 + 1.0, y0);
    let c = texel(x0, y0 + 1.0);
    let d = texel(x0 + 1.0, y0 + 1.0);

    let mut out = [0.0; 3];
    for k in 0..3 {
        let top = a[k] + (b[k] - a[k]) * tx;
        let bottom = c[k] + (d[k] - c[k]) * tx;
        out[k] = top + (bottom - top) * ty;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bilinear_at_pixel_center() {
        let data = vec![10, 20, 30, 40, 50, 60];
        let out = sample_bilinear(&data, Vec2::new(2, 1), Vec2::new(1.5, 0.5));
        assert_eq!(out, [40.0, 50.0, 60.0]);
    }

    #[test]
    fn test_sample_bilinear_between_pixels() {
        let data = vec![0, 0, 0, 100, 100, 100];
        let out = sample_bilinear(&data, Vec2::new(2, 1), Vec2::new(1.0, 0.5));
        assert!((out[0] - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_sample_bilinear_outside_is_black() {
        let data = vec![255; 3];
        let out = sample_bilinear(&data, Vec2::new(1, 1), Vec2::new(-5.0, -5.0));
        assert_eq!(out, [0.0; 3]);
    }
}
