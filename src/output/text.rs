use super::Formatter;
use crate::sweep::TpaPoint;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, point: &TpaPoint) -> String {
        format!(
            "airspeed: {:>7.1} cm/s  reference: {:.4}  smooth: {:.4}",
            point.airspeed_cm_s, point.reference_factor, point.smooth_factor
        )
    }
}
