/// Axis-style number: 145000 -> "145.0k"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(145_000.0), "145.0k");
        assert_eq!(format_compact(2_500_000.0), "2.5M");
        assert_eq!(format_compact(450.0), "450");
        assert_eq!(format_compact(22.5), "22.5");
    }
}
