use super::Formatter;
use crate::sweep::TpaPoint;

/// One JSON object per line.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, point: &TpaPoint) -> String {
        format!(
            r#"{{"airspeed_cm_s":{:.6},"reference_factor":{:.6},"smooth_factor":{:.6}}}"#,
            point.airspeed_cm_s, point.reference_factor, point.smooth_factor
        )
    }
}
