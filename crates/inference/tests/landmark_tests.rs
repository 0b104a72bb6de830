use base::{Tensor, Vec2};
use inference::hand::{HAND_CONNECTIONS, LandmarkOutput, Roi};
use inference::{HandLandmark, HandObservation, Handedness, InferError};

fn outputs(presence: f32, handedness: f32) -> Vec<Tensor<f32>> {
    let mut screen = vec![0.0; 63];
    // thumb tip at the crop center
    screen[12] = 112.0;
    screen[13] = 112.0;
    screen[14] = 22.4;
    vec![
        Tensor::new(vec![1, 63], screen).unwrap(),
        Tensor::new(vec![1, 1], vec![presence]).unwrap(),
        Tensor::new(vec![1, 1], vec![handedness]).unwrap(),
        Tensor::new(vec![1, 63], vec![9.0; 63]).unwrap(),
    ]
}

#[test]
fn test_landmark_outputs_by_size() {
    let output = LandmarkOutput::from_outputs(&outputs(0.9, 0.2)).unwrap();
    assert_eq!(output.presence, 0.9);
    assert_eq!(output.right_score, 0.2);
    assert_eq!(output.points[4].x, 112.0);
    assert_eq!(output.points[0].x, 0.0);
}

#[test]
fn test_landmark_outputs_missing_scalars() {
    let result = LandmarkOutput::from_outputs(&outputs(0.9, 0.2)[..1]);
    assert!(matches!(result, Err(InferError::Shape(_))));
}

#[test]
fn test_handedness_threshold() {
    let right = LandmarkOutput::from_outputs(&outputs(0.9, 0.8)).unwrap();
    assert_eq!(right.handedness().0, Handedness::Right);
    assert!((right.handedness().1 - 0.8).abs() < 1e-6);

    let left = LandmarkOutput::from_outputs(&outputs(0.9, 0.5)).unwrap();
    assert_eq!(left.handedness().0, Handedness::Left);
    assert!((left.handedness().1 - 0.5).abs() < 1e-6);
}

#[test]
fn test_landmarks_normalized_to_frame() {
    let output = LandmarkOutput::from_outputs(&outputs(0.9, 0.8)).unwrap();
    let frame_size = Vec2::new(224, 224);
    let landmarks = output.to_frame(&Roi::covering(frame_size), frame_size);
    let tip = landmarks[4];
    assert!((tip.x - 0.5).abs() < 1e-5);
    assert!((tip.y - 0.5).abs() < 1e-5);
    assert!((tip.z - 0.1).abs() < 1e-5);
}

#[test]
fn test_hand_landmark_indices() {
    assert_eq!(usize::from(HandLandmark::Wrist), 0);
    assert_eq!(usize::from(HandLandmark::ThumbTip), 4);
    assert_eq!(usize::from(HandLandmark::IndexTip), 8);
    assert_eq!(usize::from(HandLandmark::PinkyTip), 20);
    for (i, landmark) in HandLandmark::ALL.iter().enumerate() {
        assert_eq!(HandLandmark::try_from(i), Ok(*landmark));
    }
    assert!(HandLandmark::try_from(21).is_err());
}

#[test]
fn test_hand_connections_cover_every_landmark() {
    for landmark in HandLandmark::ALL {
        assert!(
            HAND_CONNECTIONS
                .iter()
                .any(|(a, b)| *a == landmark || *b == landmark)
        );
    }
}

#[test]
fn test_observation_pixel() {
    let mut landmarks = [base::Vec3::new(0.0, 0.0, 0.0); 21];
    landmarks[8] = base::Vec3::new(0.25, 0.5, 0.0);
    let hand = HandObservation {
        handedness: Handedness::Left,
        confidence: 0.9,
        landmarks,
    };
    assert_eq!(
        hand.pixel(HandLandmark::IndexTip, Vec2::new(640, 480)),
        Vec2::new(160.0, 240.0)
    );
    assert_eq!(Handedness::Right.to_string(), "Right");
}
