use base::Vec2;

/// SSD anchor with a fixed unit size, center normalized to the model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub center: Vec2<f32>,
}

/// Feature map strides of the palm detection model
pub const PALM_STRIDES: [usize; 4] = [8, 16, 16, 16];
pub const PALM_ANCHORS_PER_LAYER: usize = 2;
pub const PALM_ANCHOR_OFFSET: f32 = 0.5;

/// Anchors for the 192x192 palm detection model (2016 total).
pub fn palm_anchors() -> Vec<Anchor> {
    generate_anchors(
        super::PALM_INPUT_SIZE,
        &PALM_STRIDES,
        PALM_ANCHORS_PER_LAYER,
        PALM_ANCHOR_OFFSET,
    )
}

/// Generate anchors on square feature maps.
///
/// Consecutive layers sharing a stride are merged onto one grid, so every
/// cell of that grid carries `anchors_per_layer` anchors for each layer.
pub fn generate_anchors(
    input_size: usize,
    strides: &[usize],
    anchors_per_layer: usize,
    offset: f32,
) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    let mut layer = 0;
    while layer < strides.len() {
        let stride = strides[layer];
        let mut last = layer;
        while last < strides.len() && strides[last] == stride {
            last += 1;
        }
        let per_cell = anchors_per_layer * (last - layer);
        let cells = input_size.div_ceil(stride);

        for y in 0..cells {
            for x in 0..cells {
                let center = Vec2::new(
                    (x as f32 + offset) / cells as f32,
                    (y as f32 + offset) / cells as f32,
                );
                anchors.extend(std::iter::repeat_n(Anchor { center }, per_cell));
            }
        }
        layer = last;
    }
    anchors
}
