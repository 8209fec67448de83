/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Format a byte count with the first unit in B, KB, MB, GB, TB where the
/// value falls below 1024, always with two decimal places.
///
/// Uses binary units (1 KB = 1024 B) labelled with the common short forms.
/// Bytes keep the two-decimal rendering too so every status line formats
/// the same way.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} TB")
}

/// Format an optional byte count; an unknown size renders as the
/// access-denied message used throughout the progress view.
pub fn format_opt_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(b) => format_size(b),
        None => "Access Denied".to_owned(),
    }
}
