use serde::Serialize;
use std::collections::BTreeMap;

use crate::StoreScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductScores {
    pub aps: u8,
    pub sps: u8,
    pub ups: u8,
}

impl ProductScores {
    pub fn for_scope(&self, scope: StoreScope) -> u8 {
        match scope {
            StoreScope::Amazon => self.aps,
            StoreScope::Shopify => self.sps,
            StoreScope::Both => self.ups,
        }
    }
}

/// A catalog row. Metric values are display strings keyed by column id;
/// `seller_values`/`vendor_values` carry the per-account breakdown shown in
/// combined mode and are independent of the combined figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub asin: String,
    pub parent_asin: String,
    pub sku: String,
    pub brand: String,
    pub status: String,
    pub tags: Vec<String>,
    pub scores: ProductScores,
    pub values: BTreeMap<String, String>,
    pub seller_values: BTreeMap<String, String>,
    pub vendor_values: BTreeMap<String, String>,
}

impl Product {
    pub fn value(&self, column_id: &str) -> Option<&str> {
        self.values.get(column_id).map(String::as_str)
    }

    pub fn seller_value(&self, column_id: &str) -> Option<&str> {
        self.seller_values.get(column_id).map(String::as_str)
    }

    pub fn vendor_value(&self, column_id: &str) -> Option<&str> {
        self.vendor_values.get(column_id).map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
