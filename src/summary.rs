//! Post-sweep column statistics
//!
//! Summarizes each factor column and locates the largest disagreement
//! between the two models, for a quick read on how the curves differ
//! without plotting.

use rolling_stats::Stats;
use serde::Serialize;

use crate::sweep::TpaPoint;

/// Five-number summary of one factor column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f32,
    pub std_dev: f32,
    pub min: f32,
    pub max: f32,
}

impl ColumnStats {
    fn from_stats(stats: &Stats<f32>) -> Option<Self> {
        if stats.count == 0 {
            return None;
        }
        Some(Self {
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        })
    }
}

/// Column statistics plus the point of maximum divergence.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub reference: Option<ColumnStats>,
    pub smooth: Option<ColumnStats>,
    /// Largest absolute difference between the two models.
    pub max_divergence: f32,
    /// Airspeed (cm/s) where the largest difference occurs.
    pub max_divergence_airspeed: f32,
}

impl SweepSummary {
    pub fn from_points(points: &[TpaPoint]) -> Self {
        let mut reference = Stats::new();
        let mut smooth = Stats::new();
        let mut max_divergence = 0.0f32;
        let mut max_divergence_airspeed = 0.0f32;

        for point in points {
            reference.update(point.reference_factor);
            smooth.update(point.smooth_factor);

            let divergence = (point.reference_factor - point.smooth_factor).abs();
            if divergence > max_divergence {
                max_divergence = divergence;
                max_divergence_airspeed = point.airspeed_cm_s;
            }
        }

        Self {
            reference: ColumnStats::from_stats(&reference),
            smooth: ColumnStats::from_stats(&smooth),
            max_divergence,
            max_divergence_airspeed,
        }
    }
}
