use std::time::Duration;

use anyhow::{bail, Result};

/// Suffix to seconds multiplier (order matters: longer suffixes first)
const UNITS: &[(&str, f64)] = &[("ms", 1e-3), ("s", 1.0), ("m", 60.0)];

/// Parse duration strings like "1s", "500ms", "2m". A bare number is
/// taken as seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str.trim().parse()?;
            if val < 0.0 {
                bail!("Negative duration: {}", s);
            }
            return Ok(Duration::from_secs_f64(val * multiplier));
        }
    }

    match s.parse::<f64>() {
        Ok(val) if val >= 0.0 => Ok(Duration::from_secs_f64(val)),
        _ => bail!("Unknown duration format: {}", s),
    }
}

/// Format an elapsed duration for the status bar
pub fn format_age(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m{:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        let d = parse_duration("1.5s").unwrap();
        assert!((d.as_secs_f64() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_milliseconds() {
        let d = parse_duration("500ms").unwrap();
        assert_eq!(d.as_millis(), 500);
    }

    #[test]
    fn test_parse_minutes() {
        let d = parse_duration("2m").unwrap();
        assert_eq!(d.as_secs(), 120);
    }

    #[test]
    fn test_parse_bare_number_is_seconds() {
        let d = parse_duration("3").unwrap();
        assert_eq!(d.as_secs(), 3);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("-1s").is_err());
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_millis(250)), "250ms");
        assert_eq!(format_age(Duration::from_secs_f64(2.34)), "2.3s");
        assert_eq!(format_age(Duration::from_secs(90)), "1m30s");
    }
}
