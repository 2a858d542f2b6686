const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Formats a byte count as `"<value> <unit>"` with at most two decimals.
///
/// The unit is the largest of Bytes/KB/MB/GB for which the value is at least 1.
/// Counts past the GB range stay in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut divisor = 1u64;
    while exponent + 1 < UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        exponent += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024 * 5), "5 MB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1234 / 1024 = 1.205078125
        assert_eq!(format_size(1234), "1.21 KB");
    }

    #[test]
    fn stays_in_gigabytes_past_the_table() {
        let five_tb = 5 * 1024u64.pow(4);
        assert_eq!(format_size(five_tb), "5120 GB");
    }
}
