use brandflow_types::{AccountMode, ColumnDef, FilterDefinition, MetricDefinition};

use crate::{columns, filters, metrics};

/// Read-only view of every registry for one account mode
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    pub mode: AccountMode,
    pub filters: Vec<&'static FilterDefinition>,
    pub metrics: &'static [MetricDefinition],
    pub columns: Vec<&'static ColumnDef>,
}

impl ModeRegistry {
    pub fn for_mode(mode: AccountMode) -> Self {
        Self {
            mode,
            filters: filters::filter_definitions(mode),
            metrics: metrics::metric_definitions(mode),
            columns: columns::columns_for(mode),
        }
    }

    pub fn has_filter(&self, key: &str) -> bool {
        self.filters.iter().any(|f| f.key == key)
    }

    pub fn has_metric(&self, id: &str) -> bool {
        self.metrics.iter().any(|m| m.id == id)
    }

    pub fn has_column(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.metrics.is_empty() && self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_mode_is_empty() {
        assert!(ModeRegistry::for_mode(AccountMode::None).is_empty());
    }

    #[test]
    fn vendor_lacks_seller_keys() {
        let vendor = ModeRegistry::for_mode(AccountMode::Vendor);
        assert!(!vendor.has_filter("fulfillmentChannel"));
        assert!(!vendor.has_metric("organic-sales"));
        assert!(!vendor.has_column("profit"));
        assert!(vendor.has_column("shippedRevenue"));
    }
}
