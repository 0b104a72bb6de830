use base::{Rect, Tensor, Vec2};
use inference::InferError;
use inference::hand::{Anchor, PALM_KEYPOINT_COUNT, PalmDetection, Roi, decode_palms, non_max_suppression};

fn palm(center: Vec2<f32>, size: f32, score: f32) -> PalmDetection {
    PalmDetection {
        rect: Rect::from_center(center, Vec2::new(size, size)),
        score,
        keypoints: [center; PALM_KEYPOINT_COUNT],
    }
}

fn two_anchors() -> Vec<Anchor> {
    vec![
        Anchor { center: Vec2::new(0.25, 0.25) },
        Anchor { center: Vec2::new(0.75, 0.75) },
    ]
}

#[test]
fn test_decode_palms_applies_anchor_offsets() {
    let mut regressors = vec![0.0; 2 * 18];
    // second anchor: center offset (19.2, -9.6) px, size 96x48 px, wrist (+1.92, 0)
    regressors[18] = 19.2;
    regressors[19] = -9.6;
    regressors[20] = 96.0;
    regressors[21] = 48.0;
    regressors[22] = 1.92;
    let regressors = Tensor::new(vec![1, 2, 18], regressors).unwrap();
    let scores = Tensor::new(vec![1, 2, 1], vec![-10.0, 10.0]).unwrap();

    let palms = decode_palms(&regressors, &scores, &two_anchors(), 0.5).unwrap();
    assert_eq!(palms.len(), 1);
    let p = &palms[0];
    let center = p.rect.center();
    assert!((center.x - 0.85).abs() < 1e-5);
    assert!((center.y - 0.70).abs() < 1e-5);
    assert!((p.rect.size.x - 0.5).abs() < 1e-5);
    assert!((p.rect.size.y - 0.25).abs() < 1e-5);
    assert!((p.keypoints[0].x - 0.76).abs() < 1e-5);
    assert!((p.keypoints[1].x - 0.75).abs() < 1e-5);
    assert!(p.score > 0.99);
}

#[test]
fn test_decode_palms_clamps_extreme_scores() {
    let regressors = Tensor::new(vec![1, 2, 18], vec![0.0; 36]).unwrap();
    let scores = Tensor::new(vec![1, 2, 1], vec![1e6, -1e6]).unwrap();
    let palms = decode_palms(&regressors, &scores, &two_anchors(), 0.5).unwrap();
    assert_eq!(palms.len(), 1);
    assert!(palms[0].score.is_finite());
}

#[test]
fn test_decode_palms_rejects_wrong_shape() {
    let regressors = Tensor::new(vec![1, 1, 18], vec![0.0; 18]).unwrap();
    let scores = Tensor::new(vec![1, 1, 1], vec![0.0]).unwrap();
    let result = decode_palms(&regressors, &scores, &two_anchors(), 0.5);
    assert!(matches!(result, Err(InferError::Shape(_))));
}

#[test]
fn test_nms_suppresses_overlap() {
    let palms = vec![
        palm(Vec2::new(10.0, 10.0), 10.0, 0.6),
        palm(Vec2::new(11.0, 10.0), 10.0, 0.9),
    ];
    let kept = non_max_suppression(palms, 0.3, 2);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].score, 0.9);
}

#[test]
fn test_nms_keeps_disjoint_in_score_order() {
    let palms = vec![
        palm(Vec2::new(10.0, 10.0), 10.0, 0.6),
        palm(Vec2::new(100.0, 10.0), 10.0, 0.9),
    ];
    let kept = non_max_suppression(palms, 0.3, 2);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].score, 0.9);
    assert_eq!(kept[1].score, 0.6);
}

#[test]
fn test_nms_respects_max_count() {
    let palms = vec![
        palm(Vec2::new(10.0, 10.0), 10.0, 0.6),
        palm(Vec2::new(100.0, 10.0), 10.0, 0.9),
        palm(Vec2::new(200.0, 10.0), 10.0, 0.7),
    ];
    let kept = non_max_suppression(palms, 0.3, 2);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[1].score, 0.7);
}

#[test]
fn test_palm_to_frame_through_letterbox() {
    // 640x480 frame letterboxed into a 640 px square
    let cover = Roi::covering(Vec2::new(640, 480));
    let p = palm(Vec2::new(0.5, 0.5), 0.1, 0.8).to_frame(&cover);
    let center = p.rect.center();
    assert!((center.x - 320.0).abs() < 1e-3);
    assert!((center.y - 240.0).abs() < 1e-3);
    assert!((p.rect.size.x - 64.0).abs() < 1e-3);
    assert!((p.keypoints[0].y - 240.0).abs() < 1e-3);
}
