//! Formatting helpers for presenting metrics.

/// Compact byte count for chart axes, e.g. `512 B`, `12.5 KB`, `3.1 MB`.
pub fn format_bytes(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1024.0 * 1024.0 {
        format!("{:.1} MB", value / (1024.0 * 1024.0))
    } else if magnitude >= 1024.0 {
        format!("{:.1} KB", value / 1024.0)
    } else {
        format!("{value:.0} B")
    }
}
