use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Account type scope that gates which filters, metrics and columns exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountMode {
    Seller,
    Vendor,
    Both,
    None,
}

impl AccountMode {
    /// Modes that carry a non-empty registry
    pub const ALL_ACTIVE: [AccountMode; 3] =
        [AccountMode::Seller, AccountMode::Vendor, AccountMode::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountMode::Seller => "seller",
            AccountMode::Vendor => "vendor",
            AccountMode::Both => "both",
            AccountMode::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountMode::Seller => "Seller",
            AccountMode::Vendor => "Vendor",
            AccountMode::Both => "Seller + Vendor",
            AccountMode::None => "No Account",
        }
    }

    /// Next mode in the seller → vendor → both cycle (used by the dashboard hotkey)
    pub fn next(&self) -> Self {
        match self {
            AccountMode::Seller => AccountMode::Vendor,
            AccountMode::Vendor => AccountMode::Both,
            AccountMode::Both | AccountMode::None => AccountMode::Seller,
        }
    }
}

impl Default for AccountMode {
    fn default() -> Self {
        AccountMode::Seller
    }
}

impl fmt::Display for AccountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seller" => Ok(AccountMode::Seller),
            "vendor" => Ok(AccountMode::Vendor),
            "both" => Ok(AccountMode::Both),
            "none" => Ok(AccountMode::None),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Sales channel shown in the channel header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Amazon,
    Shopify,
    Walmart,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Amazon, Channel::Shopify, Channel::Walmart];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Amazon => "Amazon",
            Channel::Shopify => "Shopify",
            Channel::Walmart => "Walmart",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon" => Ok(Channel::Amazon),
            "shopify" => Ok(Channel::Shopify),
            "walmart" => Ok(Channel::Walmart),
            _ => Err(Error::unknown("channel", s)),
        }
    }
}

/// Store scope that decides which product score is shown (APS / SPS / UPS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreScope {
    Amazon,
    Shopify,
    Both,
}

impl Default for StoreScope {
    fn default() -> Self {
        StoreScope::Both
    }
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreScope::Amazon => write!(f, "amazon"),
            StoreScope::Shopify => write!(f, "shopify"),
            StoreScope::Both => write!(f, "both"),
        }
    }
}

impl FromStr for StoreScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon" => Ok(StoreScope::Amazon),
            "shopify" => Ok(StoreScope::Shopify),
            "both" => Ok(StoreScope::Both),
            _ => Err(Error::unknown("store scope", s)),
        }
    }
}

/// Row grouping for the analytics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    Brand,
    Tag,
    ParentAsin,
    Asin,
    Sku,
}

impl GroupBy {
    pub const ALL: [GroupBy; 5] = [
        GroupBy::Brand,
        GroupBy::Tag,
        GroupBy::ParentAsin,
        GroupBy::Asin,
        GroupBy::Sku,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Brand => "Brand",
            GroupBy::Tag => "Tag",
            GroupBy::ParentAsin => "Parent ASIN",
            GroupBy::Asin => "ASIN",
            GroupBy::Sku => "SKU",
        }
    }
}

impl Default for GroupBy {
    fn default() -> Self {
        GroupBy::Asin
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!("Seller".parse::<AccountMode>(), Ok(AccountMode::Seller));
        assert_eq!(" vendor ".parse::<AccountMode>(), Ok(AccountMode::Vendor));
        assert_eq!("BOTH".parse::<AccountMode>(), Ok(AccountMode::Both));
        assert!("brand".parse::<AccountMode>().is_err());
    }

    #[test]
    fn mode_cycle_skips_none() {
        assert_eq!(AccountMode::Seller.next(), AccountMode::Vendor);
        assert_eq!(AccountMode::Vendor.next(), AccountMode::Both);
        assert_eq!(AccountMode::Both.next(), AccountMode::Seller);
        assert_eq!(AccountMode::None.next(), AccountMode::Seller);
    }

    #[test]
    fn group_by_serializes_kebab_case() {
        let json = serde_json::to_string(&GroupBy::ParentAsin).unwrap();
        assert_eq!(json, "\"parent-asin\"");
    }
}
