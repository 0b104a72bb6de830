use base::{Vec2, Vec3};
use std::fmt;

/// Number of landmarks in a hand skeleton
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Which hand a detection shows, as classified by the landmark model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Left => write!(f, "Left"),
            Handedness::Right => write!(f, "Right"),
        }
    }
}

/// Hand landmark indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const ALL: [HandLandmark; HAND_LANDMARK_COUNT] = [
        HandLandmark::Wrist,
        HandLandmark::ThumbCmc,
        HandLandmark::ThumbMcp,
        HandLandmark::ThumbIp,
        HandLandmark::ThumbTip,
        HandLandmark::IndexMcp,
        HandLandmark::IndexPip,
        HandLandmark::IndexDip,
        HandLandmark::IndexTip,
        HandLandmark::MiddleMcp,
        HandLandmark::MiddlePip,
        HandLandmark::MiddleDip,
        HandLandmark::MiddleTip,
        HandLandmark::RingMcp,
        HandLandmark::RingPip,
        HandLandmark::RingDip,
        HandLandmark::RingTip,
        HandLandmark::PinkyMcp,
        HandLandmark::PinkyPip,
        HandLandmark::PinkyDip,
        HandLandmark::PinkyTip,
    ];
}

impl From<HandLandmark> for usize {
    fn from(index: HandLandmark) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for HandLandmark {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        HandLandmark::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid hand landmark index: {}. Must be in range 0-20.",
                value
            )
        })
    }
}

/// Bone pairs of the hand skeleton, for drawing.
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 21] = [
    (HandLandmark::Wrist, HandLandmark::ThumbCmc),
    (HandLandmark::ThumbCmc, HandLandmark::ThumbMcp),
    (HandLandmark::ThumbMcp, HandLandmark::ThumbIp),
    (HandLandmark::ThumbIp, HandLandmark::ThumbTip),
    (HandLandmark::Wrist, HandLandmark::IndexMcp),
    (HandLandmark::IndexMcp, HandLandmark::IndexPip),
    (HandLandmark::IndexPip, HandLandmark::IndexDip),
    (HandLandmark::IndexDip, HandLandmark::IndexTip),
    (HandLandmark::IndexMcp, HandLandmark::MiddleMcp),
    (HandLandmark::MiddleMcp, HandLandmark::MiddlePip),
    (HandLandmark::MiddlePip, HandLandmark::MiddleDip),
    (HandLandmark::MiddleDip, HandLandmark::MiddleTip),
    (HandLandmark::MiddleMcp, HandLandmark::RingMcp),
    (HandLandmark::RingMcp, HandLandmark::RingPip),
    (HandLandmark::RingPip, HandLandmark::RingDip),
    (HandLandmark::RingDip, HandLandmark::RingTip),
    (HandLandmark::RingMcp, HandLandmark::PinkyMcp),
    (HandLandmark::Wrist, HandLandmark::PinkyMcp),
    (HandLandmark::PinkyMcp, HandLandmark::PinkyPip),
    (HandLandmark::PinkyPip, HandLandmark::PinkyDip),
    (HandLandmark::PinkyDip, HandLandmark::PinkyTip),
];

/// One detected hand.
///
/// Landmarks are normalized to the frame: x and y in [0, 1] across width and
/// height, z relative to the wrist on roughly the same scale as x.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    pub handedness: Handedness,
    /// Handedness classifier confidence in [0.0, 1.0]
    pub confidence: f32,
    pub landmarks: [Vec3<f32>; HAND_LANDMARK_COUNT],
}

impl HandObservation {
    pub fn landmark(&self, index: HandLandmark) -> Vec3<f32> {
        self.landmarks[usize::from(index)]
    }

    /// Landmark position in frame pixels.
    pub fn pixel(&self, index: HandLandmark, frame_size: Vec2<usize>) -> Vec2<f32> {
        let point = self.landmark(index);
        Vec2::new(point.x * frame_size.x as f32, point.y * frame_size.y as f32)
    }
}
