use base::Tensor;
use video::convert::{decode_jpeg, flip_horizontal, yuyv_to_rgb};

#[test]
fn test_yuyv_to_rgb_gray() {
    // Y=128, U=V=128 is mid gray for both pixels
    let rgb = yuyv_to_rgb(&[128, 128, 128, 128], 2, 1).unwrap();
    assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
}

#[test]
fn test_yuyv_to_rgb_extremes() {
    let black = yuyv_to_rgb(&[0, 128, 0, 128], 2, 1).unwrap();
    assert_eq!(black, vec![0; 6]);

    let white = yuyv_to_rgb(&[255, 128, 255, 128], 2, 1).unwrap();
    assert_eq!(white, vec![255; 6]);
}

#[test]
fn test_yuyv_to_rgb_short_buffer() {
    assert!(yuyv_to_rgb(&[0, 0, 0], 2, 1).is_none());
}

#[test]
fn test_flip_horizontal_swaps_pixels() {
    // 1 row, 3 pixels
    let mut image = Tensor::new(vec![1, 3, 3], vec![1, 1, 1, 2, 2, 2, 3, 3, 3]).unwrap();
    flip_horizontal(&mut image);
    assert_eq!(image.data, vec![3, 3, 3, 2, 2, 2, 1, 1, 1]);
}

#[test]
fn test_flip_horizontal_rows_independent() {
    let mut image = Tensor::new(
        vec![2, 2, 3],
        vec![10, 11, 12, 20, 21, 22, 30, 31, 32, 40, 41, 42],
    )
    .unwrap();
    flip_horizontal(&mut image);
    assert_eq!(
        image.data,
        vec![20, 21, 22, 10, 11, 12, 40, 41, 42, 30, 31, 32]
    );
}

#[test]
fn test_flip_horizontal_twice_restores() {
    let original = Tensor::new(vec![2, 3, 3], (0..18).collect::<Vec<u8>>()).unwrap();
    let mut image = original.clone();
    flip_horizontal(&mut image);
    assert_ne!(image, original);
    flip_horizontal(&mut image);
    assert_eq!(image, original);
}

#[test]
fn test_decode_jpeg_roundtrip_dimensions() {
    let source = crates_image::RgbImage::from_pixel(8, 4, crates_image::Rgb([200, 40, 40]));
    let mut jpeg = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 95)
        .encode_image(&source)
        .unwrap();

    let frame = decode_jpeg(&jpeg).unwrap();
    assert_eq!(frame.shape, vec![4, 8, 3]);
    // lossy, but the dominant channel survives
    assert!(frame.data[0] > frame.data[1]);
}

#[test]
fn test_decode_jpeg_rejects_garbage() {
    let result = decode_jpeg(&[0x00, 0x01, 0x02]);
    assert!(matches!(result, Err(video::CameraError::Decode(_))));
}
