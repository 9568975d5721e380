//! `--filter` values.
//!
//! ```text
//! status=Active,Inactive        multi-select (comma separated options)
//! productName=porcelain         text
//! price:between:10:50           number / date: key:operator:value1[:value2]
//! trialEndTime:before:2025-12-16
//! ```

use anyhow::{Result, bail};
use brandflow_types::FilterValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: String,
    pub value: SpecValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecValue {
    /// `key=...`: options for multi filters, the text for text filters
    Assign(String),
    Compare {
        operator: String,
        value1: String,
        value2: String,
    },
}

impl FilterSpec {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let eq = raw.find('=');
        let colon = raw.find(':');

        match (eq, colon) {
            (Some(e), c) if c.is_none_or(|c| e < c) => {
                let (key, rest) = (&raw[..e], &raw[e + 1..]);
                if key.trim().is_empty() {
                    bail!("Invalid filter '{}': missing key", raw);
                }
                Ok(Self {
                    key: key.trim().to_string(),
                    value: SpecValue::Assign(rest.to_string()),
                })
            }
            (_, Some(_)) => {
                let parts: Vec<&str> = raw.split(':').collect();
                if parts.len() < 3 || parts.len() > 4 || parts[0].trim().is_empty() {
                    bail!(
                        "Invalid filter '{}', expected key:operator:value1[:value2]",
                        raw
                    );
                }
                Ok(Self {
                    key: parts[0].trim().to_string(),
                    value: SpecValue::Compare {
                        operator: parts[1].to_string(),
                        value1: parts[2].to_string(),
                        value2: parts.get(3).map(|v| v.to_string()).unwrap_or_default(),
                    },
                })
            }
            _ => bail!(
                "Invalid filter '{}', expected key=value or key:operator:value",
                raw
            ),
        }
    }
}

/// Inverse of [`FilterSpec::parse`] for an applied value
pub fn format_filter_spec(key: &str, value: &FilterValue) -> String {
    match value {
        FilterValue::Multi { values, .. } => format!("{}={}", key, values.join(",")),
        FilterValue::Text { value1 } => format!("{}={}", key, value1),
        FilterValue::Number {
            operator,
            value1,
            value2,
        } => compare_spec(key, operator.as_str(), value1, value2),
        FilterValue::Date {
            operator,
            value1,
            value2,
        } => compare_spec(key, operator.as_str(), value1, value2),
    }
}

fn compare_spec(key: &str, operator: &str, value1: &str, value2: &str) -> String {
    if value2.is_empty() {
        format!("{}:{}:{}", key, operator, value1)
    } else {
        format!("{}:{}:{}:{}", key, operator, value1, value2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::NumberOperator;

    #[test]
    fn test_parse_assign() {
        let spec = FilterSpec::parse("status=Active,Inactive").unwrap();
        assert_eq!(spec.key, "status");
        assert_eq!(spec.value, SpecValue::Assign("Active,Inactive".to_string()));
    }

    #[test]
    fn test_parse_compare() {
        let spec = FilterSpec::parse("price:between:10:50").unwrap();
        assert_eq!(
            spec.value,
            SpecValue::Compare {
                operator: "between".to_string(),
                value1: "10".to_string(),
                value2: "50".to_string(),
            }
        );
    }

    #[test]
    fn test_text_may_contain_colons() {
        let spec = FilterSpec::parse("productName=a:b").unwrap();
        assert_eq!(spec.value, SpecValue::Assign("a:b".to_string()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(FilterSpec::parse("price").is_err());
        assert!(FilterSpec::parse("=x").is_err());
        assert!(FilterSpec::parse("price:between").is_err());
    }

    #[test]
    fn test_format_matches_parse() {
        let value = FilterValue::number(NumberOperator::GreaterThan, "5", "");
        assert_eq!(format_filter_spec("price", &value), "price:greater than:5");
        assert!(FilterSpec::parse(&format_filter_spec("price", &value)).is_ok());
    }
}
