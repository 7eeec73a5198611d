/// Check that `[start, end]` is a usable time span in seconds.
///
/// Returns a human-readable reason when the span is rejected.
pub fn validate_span(start: f64, end: f64) -> Result<(), String> {
    if !start.is_finite() || !end.is_finite() {
        return Err(format!("non-finite time span [{start}, {end}]"));
    }
    if start < 0.0 {
        return Err(format!("negative start time {start}"));
    }
    if end < start {
        return Err(format!("end time {end} precedes start time {start}"));
    }
    Ok(())
}

/// Length of the intersection of two spans, or 0.0 when they are disjoint.
pub fn overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> f64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
}
