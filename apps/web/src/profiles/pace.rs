/// Parses a pace string into minutes per distance unit.
///
/// Accepts `M:SS` (minutes and seconds, e.g. `5:30` → 5.5) or a plain
/// decimal (`5.5`). Returns `None` for anything else, including
/// non-finite values and more than one colon.
pub fn parse_pace(raw: &str) -> Option<f64> {
    let raw = raw.trim();

    let value = match raw.split_once(':') {
        Some((minutes, seconds)) => {
            if seconds.contains(':') {
                return None;
            }
            let minutes: f64 = minutes.trim().parse().ok()?;
            let seconds: f64 = seconds.trim().parse().ok()?;
            minutes + seconds / 60.0
        }
        None => raw.parse().ok()?,
    };

    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_seconds_format() {
        assert_eq!(parse_pace("5:30"), Some(5.0 + 30.0 / 60.0));
        assert_eq!(parse_pace("4:05"), Some(4.0 + 5.0 / 60.0));
        assert_eq!(parse_pace("6:00"), Some(6.0));
    }

    #[test]
    fn test_decimal_format() {
        assert_eq!(parse_pace("5.5"), Some(5.5));
        assert_eq!(parse_pace("5.30"), Some(5.3));
        assert_eq!(parse_pace("7"), Some(7.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_pace("  5:30 "), Some(5.5));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(parse_pace("fast"), None);
        assert_eq!(parse_pace("5:"), None);
        assert_eq!(parse_pace(":30"), None);
        assert_eq!(parse_pace("1:2:3"), None);
        assert_eq!(parse_pace(""), None);
        assert_eq!(parse_pace("inf"), None);
        assert_eq!(parse_pace("NaN"), None);
    }

    #[test]
    fn test_every_minute_second_pair_is_exact() {
        for m in 0..15u32 {
            for s in 0..60u32 {
                let parsed = parse_pace(&format!("{m}:{s:02}")).unwrap();
                assert_eq!(parsed, m as f64 + s as f64 / 60.0);
            }
        }
    }
}
