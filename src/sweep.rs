//! Airspeed sweep driver
//!
//! Walks the configured airspeed grid and evaluates both TPA models at
//! each step, producing one [`TpaPoint`] per airspeed in ascending order.

use serde::Serialize;

use crate::config::SweepConfig;
use crate::tpa::{reference_ratio_factor, smooth_inverse_factor};

/// One evaluated sweep step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TpaPoint {
    /// Airspeed this step was evaluated at, in cm/s.
    pub airspeed_cm_s: f32,
    /// Reference-ratio model output.
    pub reference_factor: f32,
    /// Smooth inverse-power model output.
    pub smooth_factor: f32,
}

impl TpaPoint {
    /// Evaluate both models at the given airspeed.
    pub fn at(airspeed_cm_s: f32) -> Self {
        Self {
            airspeed_cm_s,
            reference_factor: reference_ratio_factor(airspeed_cm_s),
            smooth_factor: smooth_inverse_factor(airspeed_cm_s),
        }
    }
}

/// Iterator over the swept airspeed values.
///
/// Advances by repeated addition of `step` rather than computing
/// `start + i * step`, so the emitted grid is exactly the one an
/// accumulating loop visits, including any representability drift for
/// steps that are not exact binary fractions.
pub struct AirspeedSweep {
    current: f32,
    stop: f32,
    step: f32,
}

impl AirspeedSweep {
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            current: config.start,
            stop: config.stop,
            step: config.step,
        }
    }
}

impl Iterator for AirspeedSweep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.current < self.stop {
            let airspeed = self.current;
            self.current += self.step;
            Some(airspeed)
        } else {
            None
        }
    }
}

impl SweepConfig {
    /// Evaluate both models across the configured sweep, in ascending
    /// airspeed order.
    pub fn points(&self) -> impl Iterator<Item = TpaPoint> {
        AirspeedSweep::new(self).map(TpaPoint::at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_has_140_steps() {
        let airspeeds: Vec<f32> = AirspeedSweep::new(&SweepConfig::default()).collect();
        assert_eq!(airspeeds.len(), 140);
        assert_eq!(airspeeds[0], 500.0);
        assert_eq!(*airspeeds.last().unwrap(), 3975.0);
    }

    #[test]
    fn test_sweep_is_strictly_ascending() {
        let airspeeds: Vec<f32> = AirspeedSweep::new(&SweepConfig::default()).collect();
        for pair in airspeeds.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_sweep_excludes_stop_value() {
        let config = SweepConfig {
            start: 0.0,
            stop: 100.0,
            step: 50.0,
        };
        let airspeeds: Vec<f32> = AirspeedSweep::new(&config).collect();
        assert_eq!(airspeeds, vec![0.0, 50.0]);
    }

    #[test]
    fn test_points_carry_both_model_outputs() {
        let point = TpaPoint::at(2000.0);
        assert_eq!(point.airspeed_cm_s, 2000.0);
        assert!((point.reference_factor - 1.0).abs() < 0.01);
        assert!((point.smooth_factor - 1.0).abs() < 0.01);
    }
}
