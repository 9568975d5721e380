use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{AccountMode, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColumnCategory {
    Product,
    Score,
    Revenue,
    Advertising,
    Orders,
    Performance,
    Traffic,
    Inventory,
}

impl ColumnCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnCategory::Product => "Product",
            ColumnCategory::Score => "Score",
            ColumnCategory::Revenue => "Revenue",
            ColumnCategory::Advertising => "Advertising",
            ColumnCategory::Orders => "Orders",
            ColumnCategory::Performance => "Performance",
            ColumnCategory::Traffic => "Traffic",
            ColumnCategory::Inventory => "Inventory",
        }
    }
}

impl fmt::Display for ColumnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ColumnCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" => Ok(ColumnCategory::Product),
            "score" => Ok(ColumnCategory::Score),
            "revenue" => Ok(ColumnCategory::Revenue),
            "advertising" => Ok(ColumnCategory::Advertising),
            "orders" => Ok(ColumnCategory::Orders),
            "performance" => Ok(ColumnCategory::Performance),
            "traffic" => Ok(ColumnCategory::Traffic),
            "inventory" => Ok(ColumnCategory::Inventory),
            _ => Err(Error::unknown("column category", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    pub id: &'static str,
    pub label: &'static str,
    pub category: ColumnCategory,
    pub align: Align,
    pub available_in: &'static [AccountMode],
    pub sticky: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
}

impl ColumnDef {
    /// Right-aligned metric column
    pub const fn metric(
        id: &'static str,
        label: &'static str,
        category: ColumnCategory,
        available_in: &'static [AccountMode],
    ) -> Self {
        Self {
            id,
            label,
            category,
            align: Align::Right,
            available_in,
            sticky: false,
            width: None,
        }
    }

    pub const fn sticky(mut self, width: u16) -> Self {
        self.sticky = true;
        self.width = Some(width);
        self
    }

    pub const fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn is_available_in(&self, mode: AccountMode) -> bool {
        self.available_in.contains(&mode)
    }
}

/// Named shortcut that shows one category's columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnPreset {
    pub name: &'static str,
    pub category: ColumnCategory,
}
