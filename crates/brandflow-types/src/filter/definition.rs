use serde::Serialize;
use std::fmt;

use super::{DateOperator, NumberOperator};
use crate::AccountMode;

const ACTIVE_MODES: &[AccountMode] = &AccountMode::ALL_ACTIVE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Multi,
    Number,
    Date,
    Text,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterType::Multi => write!(f, "multi"),
            FilterType::Number => write!(f, "number"),
            FilterType::Date => write!(f, "date"),
            FilterType::Text => write!(f, "text"),
        }
    }
}

/// Grouping shown as a heading in the filter catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterSection {
    ProductInfo,
    SalesRevenue,
    OrdersUnits,
    VendorOperations,
}

impl FilterSection {
    pub const ALL: [FilterSection; 4] = [
        FilterSection::ProductInfo,
        FilterSection::SalesRevenue,
        FilterSection::OrdersUnits,
        FilterSection::VendorOperations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterSection::ProductInfo => "PRODUCT INFO",
            FilterSection::SalesRevenue => "SALES & REVENUE",
            FilterSection::OrdersUnits => "ORDERS & UNITS",
            FilterSection::VendorOperations => "VENDOR OPERATIONS",
        }
    }
}

impl fmt::Display for FilterSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Static description of one filterable attribute.
///
/// Definitions live in a process-wide registry and are never mutated; the
/// `available_in` list decides which account modes expose the filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilterDefinition {
    pub key: &'static str,
    pub section: FilterSection,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<&'static str>,
    #[serde(skip)]
    pub available_in: &'static [AccountMode],
}

impl FilterDefinition {
    pub const fn multi(
        key: &'static str,
        section: FilterSection,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            section,
            label,
            filter_type: FilterType::Multi,
            options,
            input_hint: None,
            currency_symbol: None,
            available_in: ACTIVE_MODES,
        }
    }

    pub const fn number(key: &'static str, section: FilterSection, label: &'static str) -> Self {
        Self {
            key,
            section,
            label,
            filter_type: FilterType::Number,
            options: &[],
            input_hint: None,
            currency_symbol: None,
            available_in: ACTIVE_MODES,
        }
    }

    pub const fn date(key: &'static str, section: FilterSection, label: &'static str) -> Self {
        Self {
            key,
            section,
            label,
            filter_type: FilterType::Date,
            options: &[],
            input_hint: None,
            currency_symbol: None,
            available_in: ACTIVE_MODES,
        }
    }

    pub const fn text(key: &'static str, section: FilterSection, label: &'static str) -> Self {
        Self {
            key,
            section,
            label,
            filter_type: FilterType::Text,
            options: &[],
            input_hint: None,
            currency_symbol: None,
            available_in: ACTIVE_MODES,
        }
    }

    pub const fn with_input_hint(mut self, hint: &'static str) -> Self {
        self.input_hint = Some(hint);
        self
    }

    pub const fn with_currency(mut self, symbol: &'static str) -> Self {
        self.currency_symbol = Some(symbol);
        self
    }

    pub const fn only_in(mut self, modes: &'static [AccountMode]) -> Self {
        self.available_in = modes;
        self
    }

    pub fn is_available_in(&self, mode: AccountMode) -> bool {
        self.available_in.contains(&mode)
    }

    /// Operator phrases offered by the editor for this filter type
    pub fn operators(&self) -> Vec<&'static str> {
        match self.filter_type {
            FilterType::Number => NumberOperator::ALL.iter().map(|op| op.as_str()).collect(),
            FilterType::Date => DateOperator::ALL.iter().map(|op| op.as_str()).collect(),
            FilterType::Multi | FilterType::Text => Vec::new(),
        }
    }
}
