/// Render seconds as `HH:MM:SS`, truncating the fractional part.
///
/// Negative and non-finite inputs render as `00:00:00`. Hours do not wrap.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
