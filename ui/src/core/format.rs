//! Formatting helpers for presenting metrics.
//!
//! Output mirrors en-US number formatting so exports are reproducible on any
//! host locale.

/// How a dashboard renders its raw series values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatterKind {
    Currency,
    Number,
    Percent,
    #[default]
    Text,
}

impl FormatterKind {
    /// Resolve a formatter by name. Unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name {
            "currency" => Self::Currency,
            "number" => Self::Number,
            "percent" => Self::Percent,
            _ => Self::Text,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Number => "number",
            Self::Percent => "percent",
            Self::Text => "text",
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            Self::Currency => format_currency(value),
            Self::Number => format_number(value),
            Self::Percent => format_percent(value),
            Self::Text => value.to_string(),
        }
    }
}

/// `135000` -> `$135,000`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs()))
}

/// `4800` -> `4,800`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded.abs()))
}

/// Dashboard-level percent: fraction in, one fixed decimal out (`0.59` -> `59.0%`).
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let tenths = (value * 1000.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Segment share used by the doughnut legend and the CSV export (`0.45` -> `45.0%`).
///
/// Kept separate from [`format_percent`]; the two are tuned independently.
pub fn format_share(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".into();
    }
    let tenths = (fraction * 1000.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Insert `,` every three digits of a non-negative whole number.
fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_drops_decimals() {
        assert_eq!(FormatterKind::Currency.format(135000.0), "$135,000");
        assert_eq!(FormatterKind::Currency.format(160500.4), "$160,500");
        assert_eq!(FormatterKind::Currency.format(999.5), "$1,000");
        assert_eq!(FormatterKind::Currency.format(-1234.0), "-$1,234");
        assert_eq!(FormatterKind::Currency.format(0.0), "$0");
    }

    #[test]
    fn number_groups_thousands() {
        assert_eq!(FormatterKind::Number.format(4800.0), "4,800");
        assert_eq!(FormatterKind::Number.format(495.0), "495");
        assert_eq!(FormatterKind::Number.format(1_234_567.0), "1,234,567");
        assert_eq!(FormatterKind::Number.format(-12_000.0), "-12,000");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(FormatterKind::Percent.format(0.59), "59.0%");
        assert_eq!(FormatterKind::Percent.format(0.6), "60.0%");
        assert_eq!(FormatterKind::Percent.format(0.125), "12.5%");
    }

    #[test]
    fn percent_rounds_half_tenths_up() {
        assert_eq!(format_percent(0.0125), "1.3%");
        assert_eq!(format_percent(0.1225), "12.3%");
        assert_eq!(format_percent(0.0025), format_share(0.0025));
    }

    #[test]
    fn text_is_identity() {
        assert_eq!(FormatterKind::Text.format(135000.0), "135000");
        assert_eq!(FormatterKind::Text.format(0.5), "0.5");
    }

    #[test]
    fn share_formatter_matches_export_style() {
        assert_eq!(format_share(0.45), "45.0%");
        assert_eq!(format_share(0.2), "20.0%");
        assert_eq!(format_share(0.04), "4.0%");
        assert_eq!(format_share(0.325), "32.5%");
    }

    #[test]
    fn unknown_formatter_falls_back_to_text() {
        assert_eq!(FormatterKind::parse("currency"), FormatterKind::Currency);
        assert_eq!(FormatterKind::parse("percent"), FormatterKind::Percent);
        assert_eq!(FormatterKind::parse("sparkline"), FormatterKind::Text);
        assert_eq!(FormatterKind::parse(""), FormatterKind::Text);
    }

    #[test]
    fn non_finite_values_render_placeholder() {
        assert_eq!(format_number(f64::NAN), "—");
        assert_eq!(format_currency(f64::INFINITY), "—");
        assert_eq!(format_share(f64::NAN), "—");
    }
}
