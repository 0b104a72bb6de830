use base::Vec2;
use inference::hand::{generate_anchors, palm_anchors};

fn assert_close(a: Vec2<f32>, b: Vec2<f32>) {
    assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6, "{:?} != {:?}", a, b);
}

#[test]
fn test_palm_anchor_count() {
    assert_eq!(palm_anchors().len(), 2016);
}

#[test]
fn test_palm_anchor_first_grid() {
    let anchors = palm_anchors();
    // 24x24 grid, two anchors per cell
    assert_close(anchors[0].center, Vec2::new(0.5 / 24.0, 0.5 / 24.0));
    assert_eq!(anchors[0], anchors[1]);
    assert_close(anchors[2].center, Vec2::new(1.5 / 24.0, 0.5 / 24.0));
    assert_close(anchors[1151].center, Vec2::new(23.5 / 24.0, 23.5 / 24.0));
}

#[test]
fn test_palm_anchor_merged_stride_16_layers() {
    let anchors = palm_anchors();
    // three stride-16 layers share one 12x12 grid with six anchors per cell
    for anchor in &anchors[1152..1158] {
        assert_close(anchor.center, Vec2::new(0.5 / 12.0, 0.5 / 12.0));
    }
    assert_close(anchors[1158].center, Vec2::new(1.5 / 12.0, 0.5 / 12.0));
    assert_close(anchors[2015].center, Vec2::new(11.5 / 12.0, 11.5 / 12.0));
}

#[test]
fn test_generate_anchors_single_layer() {
    let anchors = generate_anchors(4, &[2], 1, 0.5);
    assert_eq!(anchors.len(), 4);
    assert_close(anchors[3].center, Vec2::new(0.75, 0.75));
}

#[test]
fn test_generate_anchors_rounds_grid_up() {
    // 5 / 2 -> 3 cells per side
    assert_eq!(generate_anchors(5, &[2], 1, 0.5).len(), 9);
}
