// src/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s.trim().parse::<T>().map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a words-per-minute value. Zero passes here and is rejected by `Config`.
///
/// # Errors
/// Returns an error if the input is not a number or exceeds 10000.
pub fn parse_wpm(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 0, Some(10_000))
}

/// Parse a debounce interval in milliseconds (10..=60000).
///
/// # Errors
/// Returns an error if the input is not a number or is out of range.
pub fn parse_interval_ms(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 10, Some(60_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_usize_rejects_zero() {
        assert_eq!(parse_positive_usize("3"), Ok(3));
        assert!(parse_positive_usize("0").unwrap_err().contains("at least 1"));
        assert!(parse_positive_usize("abc").unwrap_err().contains("invalid number"));
    }

    #[test]
    fn wpm_bounds() {
        assert_eq!(parse_wpm(" 250 "), Ok(250));
        assert_eq!(parse_wpm("0"), Ok(0));
        assert!(parse_wpm("10001").is_err());
    }

    #[test]
    fn interval_bounds() {
        assert_eq!(parse_interval_ms("300"), Ok(300));
        assert!(parse_interval_ms("5").is_err());
    }
}
