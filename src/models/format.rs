/// Converts a byte count to MiB for the file-info panel, rounded to two
/// decimal places for display.
pub fn size_mib(bytes: u64) -> f64 {
    let mib = bytes as f64 / (1024.0 * 1024.0);
    (mib * 100.0).round() / 100.0
}

/// Formats a byte count as a human-readable string (1024 base).
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    // Trim trailing zeros the way `parseFloat` renders, so 1.00 KB -> "1 KB".
    let rendered = format!("{value:.decimals$}");
    let rendered = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        &rendered
    };

    format!("{rendered} {}", UNITS[exponent])
}

/// Formats a duration in whole seconds as zero-padded `HH:MM:SS`.
pub fn format_duration(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}
