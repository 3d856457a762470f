// Gesture interpretation core - turns landmark samples into debounced actions
pub mod calibrator;
pub mod classifier;
pub mod debounce;
pub mod engine;
pub mod mode;
pub mod runtime;
pub mod types;

// Re-export the surface the rest of the crate works with
pub use engine::GestureEngine;
pub use runtime::{get_engine_status, start_gesture_engine, GestureEngineHandle};
pub use types::{
    ActionRecord, Displacement, EngineStatus, GestureAction, GestureCommand, LandmarkSample,
    Mode, MouthPosition, Point2,
};
