/// Dollar amount rounded to cents, e.g. `$1.51`.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}
