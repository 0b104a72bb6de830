use base::Vec2;
use inference::{HandLandmark, HandObservation, Handedness};

/// Thumb to index distance (normalized units) at or below which the level is 0
pub const PINCH_MIN_DISTANCE: f32 = 0.05;
/// Thumb to index distance (normalized units) at or above which the level is 1
pub const PINCH_MAX_DISTANCE: f32 = 0.25;
/// Thumb tips of both hands closer than this, in pixels, request exit
pub const THUMBS_TOUCH_PIXEL_THRESHOLD: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub touch_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance: PINCH_MIN_DISTANCE,
            max_distance: PINCH_MAX_DISTANCE,
            touch_threshold: THUMBS_TOUCH_PIXEL_THRESHOLD,
        }
    }
}

impl GestureConfig {
    /// Map a thumb to index distance linearly onto [0, 1], clamped at both ends.
    ///
    /// An empty or inverted range degrades to a switch at `min_distance`.
    pub fn pinch_level(&self, distance: f32) -> f32 {
        if distance.is_nan() {
            return 0.0;
        }
        let span = self.max_distance - self.min_distance;
        if !(span > 0.0) {
            return if distance > self.min_distance { 1.0 } else { 0.0 };
        }
        ((distance - self.min_distance) / span).clamp(0.0, 1.0)
    }
}

/// A level in [0, 1] as a rounded percentage.
pub fn brightness_percentage(level: f32) -> u8 {
    (level.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Thumb tip pixel position per hand label, rebuilt every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThumbPositions {
    pub left: Option<Vec2<f32>>,
    pub right: Option<Vec2<f32>>,
}

impl ThumbPositions {
    pub fn get(&self, handedness: Handedness) -> Option<Vec2<f32>> {
        match handedness {
            Handedness::Left => self.left,
            Handedness::Right => self.right,
        }
    }

    pub fn set(&mut self, handedness: Handedness, position: Vec2<f32>) {
        match handedness {
            Handedness::Left => self.left = Some(position),
            Handedness::Right => self.right = Some(position),
        }
    }

    /// Pixel distance between the two thumbs, when both hands are present.
    pub fn distance(&self) -> Option<f32> {
        Some(self.left?.distance_to(self.right?))
    }
}

/// Pinch of one hand, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchReading {
    pub handedness: Handedness,
    pub level: f32,
    pub thumb: Vec2<f32>,
    pub index: Vec2<f32>,
}

/// Everything derived from one frame's hands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureOutcome {
    /// From the left hand
    pub volume: Option<f32>,
    /// From the right hand, as a percentage
    pub brightness: Option<u8>,
    pub thumbs: ThumbPositions,
    pub thumb_distance: Option<f32>,
    pub exit: bool,
    pub readings: Vec<PinchReading>,
}

#[derive(Debug, Clone, Default)]
pub struct GestureMapper {
    config: GestureConfig,
}

impl GestureMapper {
    pub fn new(config: GestureConfig) -> Self {
        if !(config.max_distance > config.min_distance) {
            log::warn!(
                "pinch range {}..{} is empty, levels will only be 0 or 1",
                config.min_distance,
                config.max_distance
            );
        }
        Self { config }
    }

    /// Turn one frame's hands into control levels and an exit decision.
    ///
    /// If several hands share a label, the most confident one is used (the
    /// earliest on a tie).
    pub fn map(&self, hands: &[HandObservation], frame_size: Vec2<usize>) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();

        for handedness in [Handedness::Left, Handedness::Right] {
            let Some(hand) = most_confident(hands, handedness) else {
                continue;
            };

            let distance = hand
                .landmark(HandLandmark::ThumbTip)
                .distance_to(hand.landmark(HandLandmark::IndexTip));
            let level = self.config.pinch_level(distance);
            let thumb = hand.pixel(HandLandmark::ThumbTip, frame_size);

            match handedness {
                Handedness::Left => outcome.volume = Some(level),
                Handedness::Right => outcome.brightness = Some(brightness_percentage(level)),
            }
            outcome.thumbs.set(handedness, thumb);
            outcome.readings.push(PinchReading {
                handedness,
                level,
                thumb,
                index: hand.pixel(HandLandmark::IndexTip, frame_size),
            });
        }

        outcome.thumb_distance = outcome.thumbs.distance();
        outcome.exit = outcome
            .thumb_distance
            .is_some_and(|distance| distance < self.config.touch_threshold);
        outcome
    }
}

fn most_confident(hands: &[HandObservation], handedness: Handedness) -> Option<&HandObservation> {
    hands
        .iter()
        .filter(|hand| hand.handedness == handedness)
        .fold(None, |best: Option<&HandObservation>, hand| match best {
            Some(best) if best.confidence >= hand.confidence => Some(best),
            _ => Some(hand),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_level_nan_is_zero() {
        assert_eq!(GestureConfig::default().pinch_level(f32::NAN), 0.0);
    }

    #[test]
    fn test_pinch_level_infinite_clamps() {
        assert_eq!(GestureConfig::default().pinch_level(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_brightness_percentage_rounds() {
        assert_eq!(brightness_percentage(0.756), 76);
        assert_eq!(brightness_percentage(0.754), 75);
        assert_eq!(brightness_percentage(1.0), 100);
    }
}
