//! Duration strings such as `200ms`, `1.5s` or `2m0s`

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parse an unsigned duration made of one or more `<number><unit>` segments.
///
/// Numbers may carry a fraction (`1.5s`). Units are `ns`, `us`/`µs`, `ms`,
/// `s`, `m` and `h`, plus the usual long spellings. A bare `0` is zero.
/// Sign handling is left to the caller.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = s;
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let number_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (number, after_number) = rest.split_at(number_end);

        let unit_end = after_number
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() || *c == '.')
            .map(|(i, _)| i)
            .unwrap_or(after_number.len());
        let (unit, after_unit) = after_number.split_at(unit_end);
        let unit = unit.trim();

        if number.is_empty() {
            return Err(format!("missing number before {unit:?}"));
        }
        if unit.is_empty() {
            return Err(format!("missing unit after {number:?}"));
        }

        let scale = unit_nanos(unit).ok_or_else(|| format!("unknown duration unit {unit:?}"))?;
        total = total
            .checked_add(segment_nanos(number, scale)?)
            .ok_or_else(|| "duration out of range".to_string())?;

        rest = after_unit;
    }

    let nanos = u64::try_from(total).map_err(|_| "duration out of range".to_string())?;
    Ok(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" | "nanos" | "nanosecond" | "nanoseconds" => 1,
        "us" | "µs" | "μs" | "micros" | "microsecond" | "microseconds" => NANOS_PER_MICRO,
        "ms" | "millis" | "millisecond" | "milliseconds" => NANOS_PER_MILLI,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SEC,
        "m" | "min" | "mins" | "minute" | "minutes" => 60 * NANOS_PER_SEC,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(nanos)
}

/// Nanoseconds in `<number>` units of `scale`, truncating below a nanosecond
fn segment_nanos(number: &str, scale: u128) -> Result<u128, String> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(format!("invalid number {number:?}"));
    }
    if fraction.contains('.') {
        return Err(format!("invalid number {number:?}"));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| format!("invalid number {number:?}"))?
    };
    let mut nanos = whole
        .checked_mul(scale)
        .ok_or_else(|| "duration out of range".to_string())?;

    // Digits past the 18th cannot change the result at nanosecond precision
    let mut denominator: u128 = 1;
    let mut numerator: u128 = 0;
    for digit in fraction.chars().take(18) {
        let value = digit
            .to_digit(10)
            .ok_or_else(|| format!("invalid number {number:?}"))?;
        numerator = numerator * 10 + u128::from(value);
        denominator *= 10;
    }
    nanos += numerator * scale / denominator;

    Ok(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_valid() {
        let cases = [
            ("0", Duration::ZERO),
            ("0s", Duration::ZERO),
            ("200ms", Duration::from_millis(200)),
            ("60s", Duration::from_secs(60)),
            ("1.5s", Duration::from_millis(1500)),
            (".5s", Duration::from_millis(500)),
            ("2m0s", Duration::from_secs(120)),
            ("1m500ms", Duration::from_millis(60_500)),
            ("1h2m3s", Duration::from_secs(3723)),
            ("10us", Duration::from_micros(10)),
            ("10µs", Duration::from_micros(10)),
            ("7ns", Duration::from_nanos(7)),
            ("5 secs", Duration::from_secs(5)),
            ("2mins", Duration::from_secs(120)),
            ("1hour", Duration::from_secs(3600)),
            ("  30s  ", Duration::from_secs(30)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_duration(input), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_parse_duration_invalid() {
        for input in ["", "5", "s", "1.2.3s", "abc", "10x", "1s5", "5d", "."] {
            assert!(parse_duration(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(parse_duration("99999999999999999999h").is_err());
    }
}
