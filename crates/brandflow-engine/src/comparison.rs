use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Synthetic previous-period figure paired with a table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub is_positive: bool,
    pub change_percent: f64,
    pub previous_display: String,
}

impl Comparison {
    /// Change formatted with one decimal, e.g. "7.3%"
    pub fn change_display(&self) -> String {
        format!("{:.1}%", self.change_percent)
    }
}

// prefix (currency), number with optional thousands separators and decimals, suffix ("%", units)
static NUMERIC_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<prefix>[^\d\-]*?)(?P<number>-?\d[\d,]*(?:\.\d+)?)(?P<suffix>.*?)\s*$")
        .expect("static comparison pattern is valid")
});

/// 32-bit string hash: `h = h * 31 + unit` over UTF-16 code units with
/// wrapping arithmetic.
pub fn comparison_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Deterministic pseudo comparison for one cell.
///
/// Direction comes from the parity of the hash of `"{product_id}-{column_id}"`
/// and the magnitude lands in 2.0%..=14.9%. The previous value is
/// back-computed from `raw` and printed in the same shape (currency prefix,
/// suffix, grouping, decimals). Values that are not numeric yield `"-"`.
pub fn pseudo_comparison(product_id: u32, column_id: &str, raw: &str) -> Comparison {
    let hash = comparison_hash(&format!("{}-{}", product_id, column_id));
    let is_positive = hash % 2 == 0;
    let change_percent = 2.0 + (hash.unsigned_abs() % 130) as f64 / 10.0;

    let previous_display = previous_value(raw, is_positive, change_percent)
        .unwrap_or_else(|| "-".to_string());

    Comparison {
        is_positive,
        change_percent,
        previous_display,
    }
}

fn previous_value(raw: &str, is_positive: bool, change_percent: f64) -> Option<String> {
    let caps = NUMERIC_VALUE.captures(raw)?;
    let prefix = caps.name("prefix").map_or("", |m| m.as_str());
    let number = caps.name("number")?.as_str();
    let suffix = caps.name("suffix").map_or("", |m| m.as_str());

    let grouped = number.contains(',');
    let decimals = number.split_once('.').map_or(0, |(_, frac)| frac.len());
    let current: f64 = number.replace(',', "").parse().ok()?;

    let factor = 1.0 + change_percent / 100.0;
    let previous = if is_positive {
        current / factor
    } else {
        current * factor
    };

    Some(format!(
        "{}{}{}",
        prefix,
        format_number(previous, decimals, grouped),
        suffix
    ))
}

/// Format with a fixed number of decimals, optionally grouping thousands with ','
pub fn format_number(value: f64, decimals: usize, grouped: bool) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if !grouped {
        return formatted;
    }

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Parse a display value ("$12,068.26", "18.5%", "1,120") into a number
pub fn parse_display_number(raw: &str) -> Option<f64> {
    let caps = NUMERIC_VALUE.captures(raw)?;
    caps.name("number")?.as_str().replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_31_polynomial() {
        assert_eq!(comparison_hash(""), 0);
        assert_eq!(comparison_hash("a"), 97);
        assert_eq!(comparison_hash("ab"), 97 * 31 + 98);
        // long inputs wrap instead of overflowing
        let long = "x".repeat(64);
        let _ = comparison_hash(&long);
    }

    #[test]
    fn magnitude_is_bounded() {
        for product_id in 1..=50 {
            for column in ["price", "sales", "acos", "sessions", "totalFees"] {
                let c = pseudo_comparison(product_id, column, "$100.00");
                assert!(c.change_percent >= 2.0 && c.change_percent < 14.95);
            }
        }
    }

    #[test]
    fn direction_follows_hash_parity() {
        let hash = comparison_hash("1-sales");
        let c = pseudo_comparison(1, "sales", "$12,068.26");
        assert_eq!(c.is_positive, hash % 2 == 0);
    }

    #[test]
    fn previous_keeps_value_shape() {
        let c = pseudo_comparison(2, "sales", "$11,953.96");
        assert!(c.previous_display.starts_with('$'));
        assert!(c.previous_display.contains(','));
        let decimals = c.previous_display.split_once('.').unwrap().1;
        assert_eq!(decimals.len(), 2);

        let pct = pseudo_comparison(3, "acos", "16.5%");
        assert!(pct.previous_display.ends_with('%'));
    }

    #[test]
    fn previous_back_computes_from_current() {
        let c = pseudo_comparison(4, "units", "1000");
        let previous: f64 = c.previous_display.parse().unwrap();
        let factor = 1.0 + c.change_percent / 100.0;
        let expected = if c.is_positive { 1000.0 / factor } else { 1000.0 * factor };
        assert_eq!(previous, expected.round());
    }

    #[test]
    fn non_numeric_values_have_no_previous() {
        assert_eq!(pseudo_comparison(1, "status", "-").previous_display, "-");
        assert_eq!(pseudo_comparison(1, "status", "").previous_display, "-");
        assert_eq!(pseudo_comparison(1, "status", "Available").previous_display, "-");
    }

    #[test]
    fn grouping() {
        assert_eq!(format_number(1234567.891, 2, true), "1,234,567.89");
        assert_eq!(format_number(999.0, 0, true), "999");
        assert_eq!(format_number(-1234.5, 1, true), "-1,234.5");
        assert_eq!(format_number(1234.5, 1, false), "1234.5");
    }

    #[test]
    fn parses_display_numbers() {
        assert_eq!(parse_display_number("$12,068.26"), Some(12068.26));
        assert_eq!(parse_display_number("18.5%"), Some(18.5));
        assert_eq!(parse_display_number("-"), None);
    }
}
