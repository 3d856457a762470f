// Per-sample gesture interpretation, pure of any scheduling or I/O
use std::time::Instant;

use crate::config::GestureConfig;
use crate::gesture::calibrator::{CalibrationUpdate, Calibrator};
use crate::gesture::classifier::GestureClassifier;
use crate::gesture::debounce::Debouncer;
use crate::gesture::mode::ModeController;
use crate::gesture::types::{GestureAction, GestureCommand, LandmarkSample, Mode};

/// The gesture-interpretation engine.
///
/// One call per captured frame, strictly sequential; the host loop owns
/// the cadence and the clock. Given identical sample and command
/// sequences, a fresh engine reproduces the identical action sequence.
pub struct GestureEngine {
    calibrator: Calibrator,
    debouncer: Debouncer,
    classifier: GestureClassifier,
    modes: ModeController,
}

impl GestureEngine {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            calibrator: Calibrator::new(config.smoothing_weight),
            debouncer: Debouncer::new(config.cooldown()),
            classifier: GestureClassifier::new(
                config.displacement_threshold,
                config.brightness_step,
            ),
            modes: ModeController::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn apply_command(&mut self, command: GestureCommand) {
        self.modes.apply(command);
    }

    /// Re-zero the neutral reference; the next sample calibrates and fires
    /// nothing, exactly as at startup.
    pub fn recalibrate(&mut self) {
        self.calibrator.recalibrate();
        log::info!("Neutral mouth position cleared, recalibrating on next sample");
    }

    /// Process one landmark sample and decide at most one action.
    ///
    /// The neutral reference is smoothed toward the current position on
    /// every tick after calibration, whether the tick fired an action,
    /// had it suppressed by the cooldown, or decided nothing.
    pub fn process(&mut self, sample: &LandmarkSample, now: Instant) -> Option<GestureAction> {
        let (position, displacement) = match self.calibrator.update(sample) {
            CalibrationUpdate::Initialized(pos) => {
                log::debug!(
                    "Neutral mouth position calibrated at ({:.3}, {:.3})",
                    pos.center_x,
                    pos.center_y
                );
                return None;
            }
            CalibrationUpdate::Tracking {
                position,
                displacement,
            } => (position, displacement),
        };

        let decided = match self.classifier.classify(displacement, self.modes.mode()) {
            None => None,
            Some(action) => {
                if self.debouncer.try_consume(now) {
                    Some(action)
                } else {
                    log::trace!("Cooldown active, suppressing {:?}", action);
                    None
                }
            }
        };

        self.calibrator.recenter(&position);
        decided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::types::Point2;
    use std::time::Duration;

    fn sample_at(x: f64, y: f64) -> LandmarkSample {
        LandmarkSample {
            left_mouth_corner: Point2 { x, y: 0.5 },
            right_mouth_corner: Point2 { x, y: 0.5 },
            upper_lip_center: Point2 { x: 0.5, y },
            lower_lip_center: Point2 { x: 0.5, y },
            timestamp_ms: 0,
        }
    }

    fn engine() -> GestureEngine {
        GestureEngine::new(&GestureConfig::default())
    }

    #[test]
    fn first_sample_calibrates_and_never_fires() {
        let mut engine = engine();
        // Far from anything, but there is no reference yet.
        assert_eq!(engine.process(&sample_at(0.9, 0.9), Instant::now()), None);
    }

    #[test]
    fn navigation_gesture_fires_after_calibration() {
        let mut engine = engine();
        let t0 = Instant::now();
        assert_eq!(engine.process(&sample_at(0.5, 0.5), t0), None);
        assert_eq!(
            engine.process(&sample_at(0.54, 0.5), t0 + Duration::from_millis(100)),
            Some(GestureAction::NextItem)
        );
    }

    #[test]
    fn cooldown_suppresses_but_still_recenters() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.process(&sample_at(0.5, 0.5), t0);
        assert!(engine
            .process(&sample_at(0.56, 0.5), t0 + Duration::from_millis(100))
            .is_some());

        // Within cooldown: suppressed, but the reference still moved.
        assert_eq!(
            engine.process(&sample_at(0.56, 0.5), t0 + Duration::from_millis(200)),
            None
        );

        // Past cooldown relative to the *emitted* action: fires again.
        assert_eq!(
            engine.process(&sample_at(0.56, 0.5), t0 + Duration::from_millis(450)),
            Some(GestureAction::NextItem)
        );
    }

    #[test]
    fn none_ticks_do_not_touch_the_cooldown() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.process(&sample_at(0.5, 0.5), t0);
        assert!(engine
            .process(&sample_at(0.56, 0.5), t0 + Duration::from_millis(100))
            .is_some());

        // Sub-threshold tick inside the cooldown window: no candidate, so
        // the debouncer is never consulted.
        assert_eq!(
            engine.process(&sample_at(0.505, 0.5), t0 + Duration::from_millis(200)),
            None
        );
        assert!(engine
            .process(&sample_at(0.56, 0.5), t0 + Duration::from_millis(420))
            .is_some());
    }

    #[test]
    fn mode_switch_changes_the_action_table_immediately() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.process(&sample_at(0.5, 0.5), t0);

        assert_eq!(
            engine.process(&sample_at(0.5, 0.46), t0 + Duration::from_millis(400)),
            Some(GestureAction::ScrollUp)
        );

        engine.apply_command(GestureCommand::ExitNavigationMode);
        assert_eq!(
            engine.process(&sample_at(0.5, 0.455), t0 + Duration::from_millis(800)),
            Some(GestureAction::BrightnessDelta(10))
        );

        // Horizontal displacement means nothing in brightness mode.
        assert_eq!(
            engine.process(&sample_at(0.6, 0.5), t0 + Duration::from_millis(1200)),
            None
        );
    }

    #[test]
    fn recalibrate_requires_a_fresh_first_sample() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.process(&sample_at(0.5, 0.5), t0);
        engine.recalibrate();

        // Re-initializes, so even a large offset fires nothing.
        assert_eq!(
            engine.process(&sample_at(0.8, 0.8), t0 + Duration::from_millis(400)),
            None
        );
        // And the new reference is the recalibration sample.
        assert_eq!(
            engine.process(&sample_at(0.84, 0.8), t0 + Duration::from_millis(800)),
            Some(GestureAction::NextItem)
        );
    }
}
