// Neutral mouth position calibration and slow recentering
use crate::gesture::types::{Displacement, LandmarkSample, MouthPosition};

/// Outcome of feeding one sample to the calibrator.
#[derive(Debug, Clone, Copy)]
pub enum CalibrationUpdate {
    /// The reference was just initialized from this sample; no action may
    /// fire this cycle.
    Initialized(MouthPosition),
    /// Reference already established; displacement is measured against it.
    Tracking {
        position: MouthPosition,
        displacement: Displacement,
    },
}

/// Sole owner of the neutral reference position.
///
/// The reference is set from the first observed sample and afterwards
/// pulled toward each new sample by exponential smoothing. The smoothing
/// runs on every post-calibration tick, including ticks whose action just
/// fired, so repeated gestures in one direction drag the reference toward
/// the pushed position and raise the effective threshold for that
/// direction. Known property, preserved for compatibility.
pub struct Calibrator {
    /// Weight kept on the previous reference per recenter step.
    smoothing_weight: f64,
    neutral: Option<MouthPosition>,
}

impl Calibrator {
    pub fn new(smoothing_weight: f64) -> Self {
        Self {
            smoothing_weight,
            neutral: None,
        }
    }

    /// Compute the mouth position for `sample` and measure it against the
    /// reference, initializing the reference on the first call.
    ///
    /// Never mutates an already-established reference; recentering is a
    /// separate step the engine invokes after its action decision.
    pub fn update(&mut self, sample: &LandmarkSample) -> CalibrationUpdate {
        let position = MouthPosition::from_sample(sample);
        match self.neutral {
            None => {
                self.neutral = Some(position);
                CalibrationUpdate::Initialized(position)
            }
            Some(neutral) => CalibrationUpdate::Tracking {
                position,
                displacement: Displacement::between(&position, &neutral),
            },
        }
    }

    /// Pull the reference toward `position` by one smoothing step.
    ///
    /// No-op until the reference has been initialized.
    pub fn recenter(&mut self, position: &MouthPosition) {
        if let Some(neutral) = self.neutral.as_mut() {
            let w = self.smoothing_weight;
            neutral.center_x = w * neutral.center_x + (1.0 - w) * position.center_x;
            neutral.center_y = w * neutral.center_y + (1.0 - w) * position.center_y;
        }
    }

    /// Drop the reference so the next sample re-initializes it.
    pub fn recalibrate(&mut self) {
        self.neutral = None;
    }

    pub fn neutral(&self) -> Option<MouthPosition> {
        self.neutral
    }
}
