use brandflow_types::{AppliedFilter, FilterDefinition, FilterValue};
use serde::Serialize;

use super::FilterBar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub key: String,
    pub text: String,
}

/// Human readable label for an applied filter.
///
/// `def` may be missing (stale key); the raw key is used as the label then.
/// The currency prefix is only applied to the `price` filter.
pub fn chip_text(applied: &AppliedFilter, def: Option<&FilterDefinition>, currency: &str) -> String {
    let label = def.map_or(applied.key.as_str(), |d| d.label);

    match &applied.value {
        FilterValue::Multi { values, .. } => match values.len() {
            0 => format!("{}: All", label),
            n if n <= 3 => format!("{}: {}", label, values.join(", ")),
            n => format!("{}: {} +{} more", label, values[..3].join(", "), n - 3),
        },
        FilterValue::Date {
            operator,
            value1,
            value2,
        } => {
            if operator.is_between() {
                format!("{} {} {} and {}", label, operator.title(), value1, value2)
            } else {
                format!("{} {} {}", label, operator.title(), value1)
                    .trim()
                    .to_string()
            }
        }
        FilterValue::Number {
            operator,
            value1,
            value2,
        } => {
            let cur = if applied.key == "price" { currency } else { "" };
            let text = if operator.is_between() {
                format!(
                    "{} {} {}{} and {}{}",
                    label,
                    operator.symbol(),
                    cur,
                    value1,
                    cur,
                    value2
                )
            } else {
                format!("{} {} {}{}", label, operator.symbol(), cur, value1)
            };
            text.trim().to_string()
        }
        FilterValue::Text { value1 } => format!("{}: {}", label, value1).trim().to_string(),
    }
}

/// Colour family for a tag pill, picked from keywords in the tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Red,
    Purple,
    Cyan,
    Gray,
}

impl TagColor {
    pub fn hex(&self) -> &'static str {
        match self {
            TagColor::Blue => "#3b82f6",
            TagColor::Green => "#10b981",
            TagColor::Red => "#ef4444",
            TagColor::Purple => "#8b5cf6",
            TagColor::Cyan => "#06b6d4",
            TagColor::Gray => "#64748b",
        }
    }
}

pub fn tag_color_class(tag: &str) -> TagColor {
    let lower = tag.to_lowercase();
    let has = |needle: &str| lower.contains(needle);
    if has("best") || has("blue") {
        TagColor::Blue
    } else if has("rated") || has("green") {
        TagColor::Green
    } else if has("discount") || has("red") {
        TagColor::Red
    } else if has("new") || has("organic") {
        TagColor::Purple
    } else if has("active") {
        TagColor::Cyan
    } else {
        TagColor::Gray
    }
}

impl FilterBar {
    pub fn chips(&self) -> Vec<Chip> {
        self.applied
            .iter()
            .map(|f| Chip {
                key: f.key.clone(),
                text: chip_text(f, self.definition(&f.key), &self.currency),
            })
            .collect()
    }

    /// Count shown next to a catalog entry: selected options for multi
    /// filters, 1 for any other applied filter, 0 when not applied
    pub fn badge_count(&self, key: &str) -> usize {
        match self.get(key) {
            Some(f) => match &f.value {
                FilterValue::Multi { values, .. } => values.len(),
                _ => 1,
            },
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_catalog::filter_definition;
    use brandflow_types::{AccountMode, DateOperator, NumberOperator};

    fn text_for(filter: AppliedFilter) -> String {
        let def = filter_definition(AccountMode::Seller, &filter.key);
        chip_text(&filter, def, "$")
    }

    #[test]
    fn multi_chip_variants() {
        assert_eq!(
            text_for(AppliedFilter::new("status", FilterValue::multi(Vec::<String>::new()))),
            "Status: All"
        );
        assert_eq!(
            text_for(AppliedFilter::new("status", FilterValue::multi(["Active", "Paused"]))),
            "Status: Active, Paused"
        );
    }

    #[test]
    fn date_chip_capitalises_operator() {
        assert_eq!(
            text_for(AppliedFilter::new(
                "trialEndTime",
                FilterValue::date(DateOperator::Before, "2025-12-16", "")
            )),
            "Trial End Time Before 2025-12-16"
        );
        assert_eq!(
            text_for(AppliedFilter::new(
                "trialEndTime",
                FilterValue::date(DateOperator::Between, "2025-01-01", "2025-02-01")
            )),
            "Trial End Time Between 2025-01-01 and 2025-02-01"
        );
        assert_eq!(
            text_for(AppliedFilter::new(
                "trialEndTime",
                FilterValue::date(DateOperator::After, "", "")
            )),
            "Trial End Time After"
        );
    }

    #[test]
    fn number_chip_uses_symbols_and_price_currency() {
        assert_eq!(
            text_for(AppliedFilter::new(
                "sales",
                FilterValue::number(NumberOperator::GreaterThanOrEqual, "100", "")
            )),
            "Order ≥ 100"
        );
        assert_eq!(
            text_for(AppliedFilter::new(
                "price",
                FilterValue::number(NumberOperator::LessThan, "25", "")
            )),
            "Price < $25"
        );
    }

    #[test]
    fn text_chip() {
        assert_eq!(
            text_for(AppliedFilter::new("productName", FilterValue::text("Siena"))),
            "Product Name: Siena"
        );
        assert_eq!(
            text_for(AppliedFilter::new("productName", FilterValue::text(""))),
            "Product Name:"
        );
    }

    #[test]
    fn stale_key_falls_back_to_key() {
        let filter = AppliedFilter::new("legacyKey", FilterValue::text("x"));
        assert_eq!(chip_text(&filter, None, "$"), "legacyKey: x");
    }

    #[test]
    fn tag_colors_follow_keywords() {
        assert_eq!(tag_color_class("Best Seller"), TagColor::Blue);
        assert_eq!(tag_color_class("High Rated"), TagColor::Green);
        assert_eq!(tag_color_class("Discounted"), TagColor::Red);
        assert_eq!(tag_color_class("New Arrival"), TagColor::Purple);
        assert_eq!(tag_color_class("Inactive"), TagColor::Cyan);
        assert_eq!(tag_color_class("Fragile"), TagColor::Gray);
    }

    #[test]
    fn badge_counts() {
        let bar = FilterBar::new(AccountMode::Seller);
        assert_eq!(bar.badge_count("activePackageTypes"), 2);
        assert_eq!(bar.badge_count("trialEndTime"), 1);
        assert_eq!(bar.badge_count("price"), 0);
    }
}
