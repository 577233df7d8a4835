use super::error::EngineError;

/// Points per hand in the MediaPipe hand-landmark layout.
pub const LANDMARK_COUNT: usize = 21;

const WRIST: usize = 0;
const THUMB_TIP: usize = 4;
const INDEX_TIP: usize = 8;
const MIDDLE_MCP: usize = 9;
/// (pip, tip) for index, middle, ring, pinky.
const FINGERS: [(usize, usize); 4] = [(6, 8), (10, 12), (14, 16), (18, 20)];

/// One tracked hand point in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    fn dist2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Unpack `[x0, y0, z0, x1, ...]` as handed over from JavaScript.
pub fn landmarks_from_flat(flat: &[f32]) -> Result<Vec<Landmark>, EngineError> {
    let expected = LANDMARK_COUNT * 3;
    if flat.len() != expected {
        return Err(EngineError::InvalidLandmarks {
            expected,
            got: flat.len(),
        });
    }
    Ok(flat
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect())
}

/// Instantaneous hand pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Neutral,
    Pinch,
    OpenPalm,
}

/// Edge-triggered gesture events consumed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    PinchDetected,
    OpenPalmDetected,
}

/// Per-sample output: where the hand is, and whether a gesture just began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandUpdate {
    pub x_norm: f32,
    pub y_norm: f32,
    pub event: Option<GestureEvent>,
}

/// Thumb-tip to index-tip distance in normalized image units.
pub fn pinch_distance(landmarks: &[Landmark]) -> f32 {
    match (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) {
        (Some(thumb), Some(index)) => thumb.dist2d(index),
        _ => f32::INFINITY,
    }
}

/// Classify a full set of landmarks.
///
/// Pinch wins over open palm; open palm needs every fingertip farther from
/// the wrist than its PIP joint.
pub fn classify(landmarks: &[Landmark], pinch_threshold: f32) -> Pose {
    if landmarks.len() < LANDMARK_COUNT {
        return Pose::Neutral;
    }
    if pinch_distance(landmarks) < pinch_threshold {
        return Pose::Pinch;
    }
    let wrist = &landmarks[WRIST];
    let all_extended = FINGERS
        .iter()
        .all(|&(pip, tip)| landmarks[tip].dist2d(wrist) > landmarks[pip].dist2d(wrist));
    if all_extended {
        Pose::OpenPalm
    } else {
        Pose::Neutral
    }
}

/// Turns a stream of landmark frames into anchor samples and gesture edges.
#[derive(Clone, Debug)]
pub struct GestureDetector {
    pub pinch_threshold: f32,
    /// Flip x so the cloud follows the hand in a mirrored selfie view.
    pub mirror_x: bool,
    last_pose: Pose,
}

impl GestureDetector {
    pub fn new(pinch_threshold: f32, mirror_x: bool) -> Self {
        Self {
            pinch_threshold,
            mirror_x,
            last_pose: Pose::Neutral,
        }
    }

    #[inline]
    pub fn last_pose(&self) -> Pose {
        self.last_pose
    }

    /// Forget the previous pose (hand left the frame).
    pub fn reset(&mut self) {
        self.last_pose = Pose::Neutral;
    }

    pub fn process(&mut self, landmarks: &[Landmark]) -> Option<HandUpdate> {
        if landmarks.len() < LANDMARK_COUNT {
            self.reset();
            return None;
        }
        let pose = classify(landmarks, self.pinch_threshold);
        let event = if pose == self.last_pose {
            None
        } else {
            match pose {
                Pose::Pinch => Some(GestureEvent::PinchDetected),
                Pose::OpenPalm => Some(GestureEvent::OpenPalmDetected),
                Pose::Neutral => None,
            }
        };
        self.last_pose = pose;

        let palm = landmarks[MIDDLE_MCP];
        let x_norm = if self.mirror_x { 1.0 - palm.x } else { palm.x };
        Some(HandUpdate {
            x_norm,
            y_norm: palm.y,
            event,
        })
    }
}
