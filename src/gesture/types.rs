// src/gesture/types.rs
use serde::{Deserialize, Serialize};

/// A single tracked 2D point in normalized [0,1] image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// One frame's worth of mouth landmarks from the external landmark source.
///
/// Produced once per camera frame, consumed immediately, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkSample {
    pub left_mouth_corner: Point2,
    pub right_mouth_corner: Point2,
    pub upper_lip_center: Point2,
    pub lower_lip_center: Point2,
    pub timestamp_ms: u64,
}

/// Center of the mouth, derived from the corner and lip-center landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouthPosition {
    pub center_x: f64,
    pub center_y: f64,
}

impl MouthPosition {
    pub fn from_sample(sample: &LandmarkSample) -> Self {
        Self {
            center_x: (sample.left_mouth_corner.x + sample.right_mouth_corner.x) / 2.0,
            center_y: (sample.upper_lip_center.y + sample.lower_lip_center.y) / 2.0,
        }
    }
}

/// Vector difference between the current mouth position and the neutral reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub fn between(current: &MouthPosition, neutral: &MouthPosition) -> Self {
        Self {
            dx: current.center_x - neutral.center_x,
            dy: current.center_y - neutral.center_y,
        }
    }
}

/// Which gesture-to-action table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Navigation,
    Brightness,
}

/// Symbolic commands from the voice side that the gesture core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureCommand {
    EnterNavigationMode,
    ExitNavigationMode,
}

/// Symbolic actions emitted toward the executor, at most one per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureAction {
    NextItem,
    PreviousItem,
    ScrollUp,
    ScrollDown,
    BrightnessDelta(i32),
}

impl GestureAction {
    /// Human-readable label for log output.
    pub fn describe(&self) -> String {
        match self {
            GestureAction::NextItem => "next item".to_string(),
            GestureAction::PreviousItem => "previous item".to_string(),
            GestureAction::ScrollUp => "scrolling up".to_string(),
            GestureAction::ScrollDown => "scrolling down".to_string(),
            GestureAction::BrightnessDelta(delta) => {
                if *delta >= 0 {
                    format!("brightness +{}", delta)
                } else {
                    format!("brightness {}", delta)
                }
            }
        }
    }
}

/// Record of the most recently emitted action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRecord {
    pub action: GestureAction,
    pub timestamp: String,
}

/// Snapshot of the running engine, mirrored for observers.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub is_running: bool,
    pub mode: Mode,
    pub samples_processed: u64,
    pub actions_emitted: u64,
    pub dropped_samples: u64,
    pub last_action: Option<ActionRecord>,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            is_running: false,
            mode: Mode::Navigation,
            samples_processed: 0,
            actions_emitted: 0,
            dropped_samples: 0,
            last_action: None,
        }
    }
}
