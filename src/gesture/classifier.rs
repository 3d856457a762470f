// Displacement-to-action mapping for both modes
use crate::gesture::types::{Displacement, GestureAction, Mode};

/// Maps a displacement vector to at most one action under the active mode.
///
/// Stateless and deterministic; the threshold and brightness step come
/// from configuration.
pub struct GestureClassifier {
    threshold: f64,
    brightness_step: i32,
}

impl GestureClassifier {
    pub fn new(threshold: f64, brightness_step: i32) -> Self {
        Self {
            threshold,
            brightness_step,
        }
    }

    /// Navigation checks the horizontal axis first; a gesture past the
    /// threshold on both axes resolves to the horizontal action.
    /// Brightness mode ignores horizontal displacement entirely.
    pub fn classify(&self, displacement: Displacement, mode: Mode) -> Option<GestureAction> {
        let Displacement { dx, dy } = displacement;
        match mode {
            Mode::Navigation => {
                if dx.abs() > self.threshold {
                    if dx > 0.0 {
                        Some(GestureAction::NextItem)
                    } else {
                        Some(GestureAction::PreviousItem)
                    }
                } else if dy.abs() > self.threshold {
                    if dy < 0.0 {
                        Some(GestureAction::ScrollUp)
                    } else {
                        Some(GestureAction::ScrollDown)
                    }
                } else {
                    None
                }
            }
            Mode::Brightness => {
                if dy.abs() > self.threshold {
                    if dy < 0.0 {
                        Some(GestureAction::BrightnessDelta(self.brightness_step))
                    } else {
                        Some(GestureAction::BrightnessDelta(-self.brightness_step))
                    }
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disp(dx: f64, dy: f64) -> Displacement {
        Displacement { dx, dy }
    }

    #[test]
    fn navigation_horizontal_gestures() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(
            classifier.classify(disp(0.04, 0.0), Mode::Navigation),
            Some(GestureAction::NextItem)
        );
        assert_eq!(
            classifier.classify(disp(-0.04, 0.0), Mode::Navigation),
            Some(GestureAction::PreviousItem)
        );
    }

    #[test]
    fn navigation_vertical_gestures() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(
            classifier.classify(disp(0.0, -0.04), Mode::Navigation),
            Some(GestureAction::ScrollUp)
        );
        assert_eq!(
            classifier.classify(disp(0.0, 0.04), Mode::Navigation),
            Some(GestureAction::ScrollDown)
        );
    }

    #[test]
    fn below_threshold_on_both_axes_is_none() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(classifier.classify(disp(0.01, 0.01), Mode::Navigation), None);
        assert_eq!(classifier.classify(disp(0.01, 0.01), Mode::Brightness), None);
    }

    #[test]
    fn horizontal_wins_when_both_axes_exceed_threshold() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(
            classifier.classify(disp(0.05, 0.05), Mode::Navigation),
            Some(GestureAction::NextItem)
        );
        assert_eq!(
            classifier.classify(disp(-0.05, -0.05), Mode::Navigation),
            Some(GestureAction::PreviousItem)
        );
    }

    #[test]
    fn threshold_is_strict() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(classifier.classify(disp(0.03, 0.0), Mode::Navigation), None);
        assert_eq!(classifier.classify(disp(0.0, 0.03), Mode::Brightness), None);
    }

    #[test]
    fn brightness_vertical_gestures() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(
            classifier.classify(disp(0.0, -0.04), Mode::Brightness),
            Some(GestureAction::BrightnessDelta(10))
        );
        assert_eq!(
            classifier.classify(disp(0.0, 0.04), Mode::Brightness),
            Some(GestureAction::BrightnessDelta(-10))
        );
    }

    #[test]
    fn brightness_ignores_horizontal_displacement() {
        let classifier = GestureClassifier::new(0.03, 10);
        assert_eq!(classifier.classify(disp(0.2, 0.0), Mode::Brightness), None);
        // Even with both axes past threshold, only the vertical axis counts.
        assert_eq!(
            classifier.classify(disp(0.2, 0.04), Mode::Brightness),
            Some(GestureAction::BrightnessDelta(-10))
        );
    }
}
