use super::Formatter;
use crate::sweep::TpaPoint;

/// Comma-separated rows in the classic `%f,%f,%f` sweep-dump shape, ready
/// for plotting scripts.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, point: &TpaPoint) -> String {
        format!(
            "{:.6},{:.6},{:.6}",
            point.airspeed_cm_s, point.reference_factor, point.smooth_factor
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("airspeed_cm_s,reference_ratio,smooth_inverse")
    }
}
