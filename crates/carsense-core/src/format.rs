//! Display formatting helpers.
//!
//! Locale-aware number formatting (the runtime hands the widget a user
//! locale, not a system one), the tyre-pressure range summary, and the
//! last-update timestamp.

use chrono::{DateTime, Utc};

/// Number formatting conventions for the active user locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl Locale {
    /// `1,234.5`
    pub const EN: Self = Self {
        decimal_separator: '.',
        grouping_separator: Some(','),
    };

    /// `1.234,5`
    pub const DE: Self = Self {
        decimal_separator: ',',
        grouping_separator: Some('.'),
    };

    /// `1234.5` — no grouping.
    pub const PLAIN: Self = Self {
        decimal_separator: '.',
        grouping_separator: None,
    };
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN
    }
}

/// Format a number for display: thousands grouping, at most two fraction
/// digits, trailing zeros trimmed. Pure — no side effects, no rounding
/// state.
pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let mut text = format!("{:.2}", value.abs());

    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 4);
    if negative {
        out.push('-');
    }
    match locale.grouping_separator {
        Some(sep) => out.push_str(&group_digits(int_part, sep)),
        None => out.push_str(int_part),
    }
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Format a tyre pressure: integers without a decimal, everything else
/// with one.
pub fn format_pressure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Min/max summary over a set of pressures sharing one unit, e.g.
/// `"30 - 34 psi"`. `None` when no pressure is available.
pub fn pressure_range_summary(pressures: &[f64], unit: &str) -> Option<String> {
    let finite: Vec<f64> = pressures.iter().copied().filter(|p| p.is_finite()).collect();
    let (first, rest) = finite.split_first()?;

    let (min, max) = rest.iter().fold((*first, *first), |(lo, hi), &p| {
        (lo.min(p), hi.max(p))
    });

    let range = format!("{} - {}", format_pressure(min), format_pressure(max));
    if unit.is_empty() {
        Some(range)
    } else {
        Some(format!("{range} {unit}"))
    }
}

/// Human-readable "last update" timestamp.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d %b %Y, %H:%M").to_string()
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integers_format_without_decimals() {
        assert_eq!(format_number(12345.0, Locale::EN), "12,345");
    }

    #[test]
    fn fractions_keep_at_most_two_digits() {
        assert_eq!(format_number(3.14159, Locale::EN), "3.14");
        assert_eq!(format_number(0.5, Locale::EN), "0.5");
    }

    #[test]
    fn german_locale_swaps_separators() {
        assert_eq!(format_number(1234.5, Locale::DE), "1.234,5");
    }

    #[test]
    fn plain_locale_skips_grouping() {
        assert_eq!(format_number(1234567.0, Locale::PLAIN), "1234567");
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        assert_eq!(format_number(-1000.0, Locale::EN), "-1,000");
    }

    #[test]
    fn pressure_summary_uses_min_max_and_shared_unit() {
        let summary = pressure_range_summary(&[32.0, 33.0, 30.0, 34.0], "psi");
        assert_eq!(summary.as_deref(), Some("30 - 34 psi"));
    }

    #[test]
    fn pressure_summary_keeps_one_decimal_for_fractions() {
        let summary = pressure_range_summary(&[2.5, 3.0], "bar");
        assert_eq!(summary.as_deref(), Some("2.5 - 3 bar"));
    }

    #[test]
    fn pressure_summary_without_values_is_none() {
        assert_eq!(pressure_range_summary(&[], "psi"), None);
        assert_eq!(pressure_range_summary(&[f64::NAN], "psi"), None);
    }

    #[test]
    fn pressure_summary_without_unit_has_no_trailing_space() {
        let summary = pressure_range_summary(&[30.0, 34.0], "");
        assert_eq!(summary.as_deref(), Some("30 - 34"));
    }

    #[test]
    fn timestamp_formatting() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "15 Jun 2024, 10:30");
    }
}
