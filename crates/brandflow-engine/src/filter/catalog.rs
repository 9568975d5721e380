use brandflow_catalog::{filter_definitions, sections};
use brandflow_types::{FilterSection, FilterType};
use serde::Serialize;

use super::FilterBar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub badge: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSection {
    pub section: FilterSection,
    pub label: &'static str,
    pub entries: Vec<CatalogEntry>,
}

impl FilterBar {
    /// Catalog grouped by section, narrowed by the filter search (label,
    /// case-insensitive). Sections left without entries are dropped.
    pub fn catalog_sections(&self) -> Vec<CatalogSection> {
        let needle = self.filter_search.to_lowercase();
        let defs = filter_definitions(self.mode);

        sections(self.mode)
            .into_iter()
            .filter_map(|section| {
                let entries: Vec<CatalogEntry> = defs
                    .iter()
                    .filter(|d| d.section == section)
                    .filter(|d| d.label.to_lowercase().contains(&needle))
                    .map(|d| CatalogEntry {
                        key: d.key,
                        label: d.label,
                        filter_type: d.filter_type,
                        badge: self.badge_count(d.key),
                    })
                    .collect();
                (!entries.is_empty()).then(|| CatalogSection {
                    section,
                    label: section.label(),
                    entries,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::AccountMode;

    #[test]
    fn search_narrows_sections() {
        let mut bar = FilterBar::new(AccountMode::Seller);
        assert_eq!(bar.catalog_sections().len(), 3);

        bar.set_filter_search("TRIAL");
        let found = bar.catalog_sections();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "ORDERS & UNITS");
        assert_eq!(found[0].entries[0].key, "trialEndTime");
        assert_eq!(found[0].entries[0].badge, 1);

        bar.set_filter_search("nothing matches");
        assert!(bar.catalog_sections().is_empty());
    }
}
