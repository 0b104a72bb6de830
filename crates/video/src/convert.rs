use crate::CameraError;
use base::Tensor;

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    [r, g, b]
}

/// Converts YUYV (YUV 4:2:2) pixel data to packed RGB.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`, each pair of pixels sharing U and V.
/// Returns `None` if `data` holds fewer than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let pixel_count = width * height;
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for chunk in data[..expected_len].chunks_exact(4) {
        rgb.extend_from_slice(&yuv_to_rgb(chunk[0], chunk[1], chunk[3]));
        rgb.extend_from_slice(&yuv_to_rgb(chunk[2], chunk[1], chunk[3]));
    }
    Some(rgb)
}

/// Decodes an MJPEG frame into an RGB tensor `[height, width, 3]`.
pub fn decode_jpeg(data: &[u8]) -> Result<Tensor<u8>, CameraError> {
    let rgb = crates_image::load_from_memory_with_format(data, crates_image::ImageFormat::Jpeg)?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Tensor::new(
        vec![height as usize, width as usize, 3],
        rgb.into_raw(),
    )?)
}

/// Mirrors an HWC image left-to-right in place.
pub fn flip_horizontal(image: &mut Tensor<u8>) {
    let (width, channels) = match image.shape.as_slice() {
        &[_, w, c] => (w, c),
        _ => return,
    };
    let row_len = width * channels;
    if row_len == 0 {
        return;
    }
    for row in image.data.chunks_exact_mut(row_len) {
        for x in 0..width / 2 {
            let left = x * channels;
            let right = (width - 1 - x) * channels;
            for c in 0..channels {
                row.swap(left + c, right + c);
            }
        }
    }
}
