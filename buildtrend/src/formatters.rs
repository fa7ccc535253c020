//! Value formatting helpers shared by the built-in providers.
//!
//! Formatters are deterministic and side-effect-free: the summary engine
//! calls them for the current value, the previous value, and the delta
//! magnitude, and relies on identical inputs producing identical output.

/// Formats a byte count with decimal units and one fractional digit.
///
/// # Examples
///
/// ```rust
/// use buildtrend::formatters::format_bytes;
///
/// assert_eq!(format_bytes(999), "999 bytes");
/// assert_eq!(format_bytes(500_000), "500.0 KB");
/// assert_eq!(format_bytes(2_000_000), "2.0 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

    if bytes < 1000 {
        return format!("{bytes} bytes");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    // 999.95 and above would print as "1000.0", so roll over to the next
    // unit before the one-decimal rounding happens.
    while value >= 999.95 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Formats a count with thousands separators, e.g. `12,345`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_thousand_are_exact() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(42), "42 bytes");
    }

    #[test]
    fn bytes_scale_through_decimal_units() {
        assert_eq!(format_bytes(1_000), "1.0 KB");
        assert_eq!(format_bytes(2_500_000), "2.5 MB");
        assert_eq!(format_bytes(3_200_000_000), "3.2 GB");
        assert_eq!(format_bytes(7_100_000_000_000), "7.1 TB");
    }

    #[test]
    fn bytes_near_a_unit_boundary_roll_over() {
        assert_eq!(format_bytes(999_949), "999.9 KB");
        assert_eq!(format_bytes(999_999), "1.0 MB");
        assert_eq!(format_bytes(999_950_000), "1.0 GB");
    }

    #[test]
    fn counts_group_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }
}
