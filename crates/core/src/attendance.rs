//! Attendance parsing, banding and the overall figure.
//!
//! Everything here is a pure function of the subject list so views can
//! recompute on every render.

use crate::model::Subject;

/// Lower bound (inclusive) of the "good" band.
pub const GOOD_THRESHOLD: f64 = 75.0;
/// Lower bound (inclusive) of the "warning" band.
pub const WARNING_THRESHOLD: f64 = 60.0;

/// Three-level classification of an attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    Critical,
    Warning,
    Good,
}

impl Band {
    /// Classify a percentage. `NaN` counts as critical.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= GOOD_THRESHOLD {
            Band::Good
        } else if value >= WARNING_THRESHOLD {
            Band::Warning
        } else {
            Band::Critical
        }
    }

    /// Stable identifier used for CSS class hooks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Band::Good => "good",
            Band::Warning => "warning",
            Band::Critical => "critical",
        }
    }
}

/// Status shown next to the overall figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    LowAttendance,
    Excellent,
}

impl Standing {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < GOOD_THRESHOLD {
            Standing::LowAttendance
        } else {
            Standing::Excellent
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Standing::LowAttendance => "Low Attendance",
            Standing::Excellent => "Excellent Standing",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Standing::LowAttendance => "⚠️",
            Standing::Excellent => "✅",
        }
    }
}

/// Aggregate attendance across all subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallAttendance {
    /// Mean attendance rounded to one decimal.
    pub value: f64,
    /// `value` formatted with one decimal and a trailing `%`.
    pub label: String,
    pub band: Band,
    pub standing: Standing,
}

/// Parse the leading number of an attendance string such as `"82%"` or `" 64.5 % "`.
///
/// Returns `None` when the string does not start with a number. Overflowing
/// exponents and a leading `Infinity` yield an infinite value.
#[must_use]
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let infinity = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Only consume an exponent when it is complete, e.g. "1e2" but not "1e".
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Parse an attendance string and clamp it to `[0, 100]`; unparseable input is `0`.
#[must_use]
pub fn parse_percent(raw: &str) -> f64 {
    clamp_percent(parse_leading_number(raw).unwrap_or(0.0))
}

/// Clamp to `[0, 100]`. `NaN` and negative zero both become `+0.0`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0) + 0.0
}

/// Format a per-subject percentage: whole numbers without decimals, else one decimal.
#[must_use]
pub fn format_percent(value: f64) -> String {
    let rounded = round_one_decimal(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Arithmetic mean of the clamped subject percentages. An empty list yields `0.0%`.
#[must_use]
pub fn overall(subjects: &[Subject]) -> OverallAttendance {
    // `Sum` for an empty f64 iterator starts from -0.0.
    let total = subjects
        .iter()
        .map(Subject::attendance_percent)
        .fold(0.0, |acc, value| acc + value);
    #[allow(clippy::cast_precision_loss)]
    let count = subjects.len().max(1) as f64;
    let value = round_one_decimal(total / count);
    let label = format!("{value:.1}%");
    // Band and standing read the rounded label, the same figure the student sees.
    let shown = parse_percent(&label);

    OverallAttendance {
        value,
        label,
        band: Band::of(shown),
        standing: Standing::of(shown),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
