use brandflow_catalog::sample_products;
use brandflow_types::{AccountMode, ColumnDef, Product, StoreScope};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::comparison::{Comparison, parse_display_number, pseudo_comparison};
use crate::tags::{TagStore, toggle_on_product};

const NAME_LIMIT: usize = 50;
const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Good => "#059669",
            ScoreBand::Fair => "#d97706",
            ScoreBand::Poor => "#dc2626",
        }
    }
}

pub fn score_band(score: u8) -> ScoreBand {
    match score {
        80.. => ScoreBand::Good,
        50..=79 => ScoreBand::Fair,
        _ => ScoreBand::Poor,
    }
}

/// Short name of the performance score for the store scope
pub fn score_label(scope: StoreScope) -> &'static str {
    match scope {
        StoreScope::Amazon => "APS",
        StoreScope::Shopify => "SPS",
        StoreScope::Both => "UPS",
    }
}

pub fn score_title(scope: StoreScope) -> &'static str {
    match scope {
        StoreScope::Amazon => "Amazon Performance Score",
        StoreScope::Shopify => "Shopify Performance Score",
        StoreScope::Both => "Unified Performance Score",
    }
}

pub fn score_for(product: &Product, scope: StoreScope) -> u8 {
    product.scores.for_scope(scope)
}

/// Product name cut to the first 50 characters with an ellipsis
pub fn summary_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub seller: String,
    pub vendor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub column_id: &'static str,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub product_id: u32,
    pub selected: bool,
    pub tags: Vec<String>,
    pub cells: Vec<TableCell>,
}

/// Product rows with their row selection, tag dictionary and store scope
#[derive(Debug, Clone)]
pub struct ProductTable {
    products: Vec<Product>,
    tags: TagStore,
    selected: BTreeSet<u32>,
    scope: StoreScope,
}

impl Default for ProductTable {
    fn default() -> Self {
        Self::new(sample_products(), TagStore::default())
    }
}

impl ProductTable {
    pub fn new(products: Vec<Product>, tags: TagStore) -> Self {
        Self {
            products,
            tags,
            selected: BTreeSet::new(),
            scope: StoreScope::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn tag_store(&self) -> &TagStore {
        &self.tags
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: StoreScope) {
        self.scope = scope;
    }

    pub fn selected_ids(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn all_selected(&self) -> bool {
        !self.products.is_empty() && self.products.iter().all(|p| self.selected.contains(&p.id))
    }

    pub fn toggle_product(&mut self, id: u32) {
        if !self.selected.remove(&id) && self.product(id).is_some() {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: clears when every row is selected, selects all otherwise
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.products.iter().map(|p| p.id).collect();
        }
    }

    /// Stable sort on the column's numeric value. Rows without a number go
    /// last in either direction.
    pub fn sort_by(&mut self, column_id: &str, direction: SortDirection) {
        let scope = self.scope;
        self.products.sort_by(|a, b| {
            let ka = sort_key(a, column_id, scope);
            let kb = sort_key(b, column_id, scope);
            match (ka, kb) {
                (Some(x), Some(y)) => {
                    let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                    match direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        debug!(column_id, ?direction, "products sorted");
    }

    /// Render the visible columns for every product
    pub fn rows(&self, columns: &[&'static ColumnDef], mode: AccountMode) -> Vec<TableRow> {
        trace!(columns = columns.len(), %mode, "building table rows");
        self.products
            .iter()
            .map(|product| TableRow {
                product_id: product.id,
                selected: self.is_selected(product.id),
                tags: product.tags.clone(),
                cells: columns
                    .iter()
                    .map(|col| self.cell(product, col, mode))
                    .collect(),
            })
            .collect()
    }

    fn cell(&self, product: &Product, col: &'static ColumnDef, mode: AccountMode) -> TableCell {
        match col.id {
            "product" => plain(col.id, summary_name(&product.name)),
            "productScore" => plain(col.id, score_for(product, self.scope).to_string()),
            id => {
                let display = product.value(id).unwrap_or(EMPTY_CELL).to_string();
                let comparison = parse_display_number(&display)
                    .map(|_| pseudo_comparison(product.id, id, &display));
                let breakdown = if mode == AccountMode::Both {
                    product
                        .seller_value(id)
                        .zip(product.vendor_value(id))
                        .map(|(seller, vendor)| Breakdown {
                            seller: seller.to_string(),
                            vendor: vendor.to_string(),
                        })
                } else {
                    None
                };
                TableCell {
                    column_id: col.id,
                    display,
                    comparison,
                    breakdown,
                }
            }
        }
    }

    pub fn create_tag(&mut self, name: &str, color: Option<&str>) -> Option<String> {
        self.tags.create(name, color)
    }

    /// Create the tag if needed, then toggle it on the product
    pub fn toggle_tag(&mut self, product_id: u32, tag: &str) -> bool {
        let Some(key) = self.tags.create(tag, None) else {
            return false;
        };
        match self.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => {
                toggle_on_product(product, &key);
                true
            }
            None => false,
        }
    }

    pub fn update_tag(&mut self, old: &str, new: &str, color: &str) {
        self.tags.update(old, new, color, &mut self.products);
    }

    pub fn delete_tag(&mut self, name: &str) {
        self.tags.delete(name, &mut self.products);
    }
}

fn plain(column_id: &'static str, display: String) -> TableCell {
    TableCell {
        column_id,
        display,
        comparison: None,
        breakdown: None,
    }
}

fn sort_key(product: &Product, column_id: &str, scope: StoreScope) -> Option<f64> {
    match column_id {
        "productScore" => Some(f64::from(score_for(product, scope))),
        id => product.value(id).and_then(parse_display_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_catalog::column;

    fn cols(ids: &[&str]) -> Vec<&'static ColumnDef> {
        ids.iter().filter_map(|id| column(id)).collect()
    }

    #[test]
    fn score_bands() {
        assert_eq!(score_band(80), ScoreBand::Good);
        assert_eq!(score_band(79), ScoreBand::Fair);
        assert_eq!(score_band(50), ScoreBand::Fair);
        assert_eq!(score_band(49), ScoreBand::Poor);
        assert_eq!(ScoreBand::Poor.color(), "#dc2626");
    }

    #[test]
    fn locked_columns_render_summary_and_scope_score() {
        let mut table = ProductTable::default();
        table.set_scope(StoreScope::Amazon);
        let rows = table.rows(&cols(&["product", "productScore"]), AccountMode::Seller);

        assert_eq!(
            rows[0].cells[0].display,
            "Karaca Siena 53-Piece Porcelain Plates and Bowls S..."
        );
        assert_eq!(rows[0].cells[1].display, "78");
        assert!(rows[0].cells[1].comparison.is_none());
        assert_eq!(score_label(table.scope()), "APS");
    }

    #[test]
    fn metric_cells_carry_comparison() {
        let table = ProductTable::default();
        let rows = table.rows(&cols(&["sales"]), AccountMode::Seller);
        let cell = &rows[0].cells[0];
        assert_eq!(cell.display, "$12,068.26");
        assert_eq!(
            cell.comparison,
            Some(pseudo_comparison(1, "sales", "$12,068.26"))
        );
        assert!(cell.breakdown.is_none());
    }

    #[test]
    fn both_mode_adds_breakdown() {
        let table = ProductTable::default();
        let rows = table.rows(&cols(&["sales", "profit"]), AccountMode::Both);
        assert_eq!(
            rows[0].cells[0].breakdown,
            Some(Breakdown {
                seller: "$7,241.00".into(),
                vendor: "$4,827.26".into()
            })
        );
        assert!(rows[0].cells[1].breakdown.is_none());
    }

    #[test]
    fn sort_descending_by_sales() {
        let mut table = ProductTable::default();
        table.sort_by("sales", SortDirection::Desc);
        let ids: Vec<_> = table.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 4]);
    }

    #[test]
    fn rows_without_numbers_sort_last() {
        let mut products = sample_products();
        products[0].values.insert("sales".into(), "-".into());
        let mut table = ProductTable::new(products, TagStore::default());
        table.sort_by("sales", SortDirection::Asc);
        assert_eq!(table.products().last().map(|p| p.id), Some(1));
        table.sort_by("sales", SortDirection::Desc);
        assert_eq!(table.products().last().map(|p| p.id), Some(1));
    }

    #[test]
    fn row_selection() {
        let mut table = ProductTable::default();
        table.toggle_product(2);
        assert!(table.is_selected(2));
        table.toggle_product(99);
        assert!(!table.is_selected(99));

        table.toggle_all();
        assert!(table.all_selected());
        table.toggle_all();
        assert!(table.selected_ids().is_empty());
    }

    #[test]
    fn tagging_through_the_table() {
        let mut table = ProductTable::default();
        assert!(table.toggle_tag(4, "clearance"));
        assert_eq!(table.product(4).map(|p| p.tags.clone()), Some(vec!["clearance".to_string()]));
        assert!(table.tag_store().get("clearance").is_some());

        table.update_tag("clearance", "Clearance", "#EF4444");
        assert!(table.product(4).is_some_and(|p| p.has_tag("Clearance")));

        table.delete_tag("Clearance");
        assert!(table.product(4).is_some_and(|p| p.tags.is_empty()));
    }
}
