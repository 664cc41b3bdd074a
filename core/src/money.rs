/// Format an amount for display after a `$` sign.
///
/// Whole amounts keep a single decimal (`150.0`), anything else uses the
/// shortest representation that round-trips (`21.428571428571427`).
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0 as well
        return "0.0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
