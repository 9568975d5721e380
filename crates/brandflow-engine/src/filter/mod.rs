//! Advanced filter bar: applied filters, the draft being edited and the
//! popover state machine that moves between them.
//!
//! ```text
//! Closed --open_add_filter--> SelectingFilter --select_filter--> EditingDraft
//! Closed --edit_chip-------------------------------------------> EditingDraft
//! EditingDraft --apply | cancel | outside click--> Closed
//! ```

mod catalog;
mod chips;
mod draft;

pub use catalog::{CatalogEntry, CatalogSection};
pub use chips::{Chip, TagColor, chip_text, tag_color_class};

use brandflow_catalog::{default_applied_filters, filter_definition};
use brandflow_types::{AccountMode, AppliedFilter, Draft, FilterDefinition, FilterValue};
use serde::Serialize;
use tracing::debug;

/// Where the draft editor was opened from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorOrigin {
    Catalog,
    Chip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum EditorState {
    Closed,
    SelectingFilter,
    EditingDraft { key: String, origin: EditorOrigin },
}

/// What a pointer press landed on while a popover is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    InsidePopover,
    /// An element that opens a popover itself (Add Filter button, chip)
    Trigger,
    Elsewhere,
}

#[derive(Debug, Clone)]
pub struct FilterBar {
    mode: AccountMode,
    applied: Vec<AppliedFilter>,
    editor: EditorState,
    draft: Option<Draft>,
    filter_search: String,
    option_search: String,
    currency: String,
}

impl FilterBar {
    /// Filter bar seeded with the default filters that exist in `mode`
    pub fn new(mode: AccountMode) -> Self {
        Self::with_applied(mode, default_applied_filters())
    }

    pub fn with_applied(mode: AccountMode, applied: Vec<AppliedFilter>) -> Self {
        let mut bar = Self {
            mode,
            applied: Vec::new(),
            editor: EditorState::Closed,
            draft: None,
            filter_search: String::new(),
            option_search: String::new(),
            currency: "$".to_string(),
        };
        for filter in applied {
            if bar.definition(&filter.key).is_some() {
                bar.upsert(filter);
            }
        }
        bar
    }

    pub fn mode(&self) -> AccountMode {
        self.mode
    }

    pub fn applied(&self) -> &[AppliedFilter] {
        &self.applied
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn filter_search(&self) -> &str {
        &self.filter_search
    }

    pub fn option_search(&self) -> &str {
        &self.option_search
    }

    pub fn is_open(&self) -> bool {
        self.editor != EditorState::Closed
    }

    pub fn definition(&self, key: &str) -> Option<&'static FilterDefinition> {
        filter_definition(self.mode, key)
    }

    pub fn get(&self, key: &str) -> Option<&AppliedFilter> {
        self.applied.iter().find(|f| f.key == key)
    }

    /// Toggle the "Add Filter" popover. Any chip editor and draft are dropped.
    pub fn open_add_filter(&mut self) {
        let was_open = matches!(
            self.editor,
            EditorState::SelectingFilter
                | EditorState::EditingDraft {
                    origin: EditorOrigin::Catalog,
                    ..
                }
        );
        self.draft = None;
        self.option_search.clear();
        self.editor = if was_open {
            EditorState::Closed
        } else {
            EditorState::SelectingFilter
        };
        debug!(state = ?self.editor, "add filter toggled");
    }

    /// Pick a catalog entry and start editing it. Unknown keys are ignored.
    pub fn select_filter(&mut self, key: &str) -> bool {
        let Some(draft) = self.build_draft(key) else {
            debug!(key, "select_filter: key not in catalog");
            return false;
        };
        self.draft = Some(draft);
        self.option_search.clear();
        self.editor = EditorState::EditingDraft {
            key: key.to_string(),
            origin: EditorOrigin::Catalog,
        };
        debug!(key, "editing draft from catalog");
        true
    }

    /// Open the editor for an applied chip
    pub fn edit_chip(&mut self, key: &str) -> bool {
        if self.get(key).is_none() {
            return false;
        }
        let Some(draft) = self.build_draft(key) else {
            return false;
        };
        self.draft = Some(draft);
        self.option_search.clear();
        self.editor = EditorState::EditingDraft {
            key: key.to_string(),
            origin: EditorOrigin::Chip,
        };
        debug!(key, "editing draft from chip");
        true
    }

    /// Commit the draft: replace the filter with the same key in place, or
    /// append it. The draft is taken as-is without validation.
    pub fn apply(&mut self) {
        if let Some(draft) = self.draft.take()
            && self.definition(&draft.key).is_some()
        {
            debug!(key = %draft.key, "draft applied");
            self.upsert(draft.into());
        }
        self.close();
    }

    /// Discard the draft and close whichever popover is open
    pub fn cancel(&mut self) {
        if self.draft.is_some() {
            debug!("draft discarded");
        }
        self.close();
    }

    pub fn outside_click(&mut self, target: ClickTarget) {
        if self.is_open() && target == ClickTarget::Elsewhere {
            self.cancel();
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.applied.len();
        self.applied.retain(|f| f.key != key);
        let removed = self.applied.len() != before;
        if removed {
            debug!(key, "filter removed");
        }
        removed
    }

    pub fn clear_all(&mut self) {
        self.applied.clear();
    }

    /// Switch catalogs: drop filters the new mode does not define and close
    /// an editor whose key disappeared.
    pub fn set_mode(&mut self, mode: AccountMode) {
        self.mode = mode;
        let before = self.applied.len();
        self.applied
            .retain(|f| filter_definition(mode, &f.key).is_some());

        if let EditorState::EditingDraft { key, .. } = &self.editor
            && filter_definition(mode, key).is_none()
        {
            self.close();
        }
        debug!(%mode, pruned = before - self.applied.len(), "filter bar mode changed");
    }

    pub fn set_currency(&mut self, symbol: impl Into<String>) {
        self.currency = symbol.into();
    }

    pub fn set_filter_search(&mut self, query: impl Into<String>) {
        self.filter_search = query.into();
    }

    pub fn set_option_search(&mut self, query: impl Into<String>) {
        self.option_search = query.into();
    }

    /// Draft for `key`: a copy of the applied filter, or the type defaults
    fn build_draft(&self, key: &str) -> Option<Draft> {
        let def = self.definition(key)?;
        let value = match self.get(key) {
            Some(existing) if existing.filter_type() == def.filter_type => existing.value.clone(),
            _ => FilterValue::default_for(def.filter_type),
        };
        Some(Draft::new(key, value))
    }

    fn upsert(&mut self, filter: AppliedFilter) {
        match self.applied.iter_mut().find(|f| f.key == filter.key) {
            Some(slot) => *slot = filter,
            None => self.applied.push(filter),
        }
    }

    fn close(&mut self) {
        self.editor = EditorState::Closed;
        self.draft = None;
        self.filter_search.clear();
        self.option_search.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandflow_types::{DateOperator, MatchMode, NumberOperator};

    fn empty_bar() -> FilterBar {
        FilterBar::with_applied(AccountMode::Seller, Vec::new())
    }

    #[test]
    fn starts_with_default_filters() {
        let bar = FilterBar::new(AccountMode::Seller);
        let keys: Vec<_> = bar.applied().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["activePackageTypes", "trialEndTime"]);
        assert_eq!(bar.editor(), &EditorState::Closed);
    }

    #[test]
    fn add_filter_toggles_and_clears_draft() {
        let mut bar = empty_bar();
        bar.open_add_filter();
        assert_eq!(bar.editor(), &EditorState::SelectingFilter);

        assert!(bar.select_filter("price"));
        assert!(bar.draft().is_some());

        bar.open_add_filter();
        assert_eq!(bar.editor(), &EditorState::Closed);
        assert!(bar.draft().is_none());
    }

    #[test]
    fn new_drafts_use_type_defaults() {
        let mut bar = empty_bar();
        bar.select_filter("price");
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::number(NumberOperator::GreaterThanOrEqual, "", "")
        );
        bar.select_filter("trialEndTime");
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::date(DateOperator::Before, "", "")
        );
        bar.select_filter("tagList");
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::Multi {
                values: vec![],
                match_mode: MatchMode::Any
            }
        );
    }

    #[test]
    fn drafts_copy_existing_filters() {
        let mut bar = FilterBar::new(AccountMode::Seller);
        assert!(bar.edit_chip("trialEndTime"));
        assert_eq!(
            bar.editor(),
            &EditorState::EditingDraft {
                key: "trialEndTime".into(),
                origin: EditorOrigin::Chip
            }
        );
        assert_eq!(
            bar.draft().unwrap().value,
            FilterValue::date(DateOperator::Before, "2025-12-16", "")
        );
    }

    #[test]
    fn apply_replaces_in_place() {
        let mut bar = FilterBar::new(AccountMode::Seller);
        bar.edit_chip("activePackageTypes");
        bar.toggle_option("Amazon - DSP");
        bar.apply();

        assert_eq!(bar.applied().len(), 2);
        assert_eq!(bar.applied()[0].key, "activePackageTypes");
        assert_eq!(bar.applied()[0].value.selected().len(), 3);
        assert_eq!(bar.editor(), &EditorState::Closed);
    }

    #[test]
    fn apply_appends_new_keys() {
        let mut bar = FilterBar::new(AccountMode::Seller);
        bar.open_add_filter();
        bar.select_filter("productName");
        bar.set_text("Siena");
        bar.apply();
        assert_eq!(bar.applied().last().unwrap().key, "productName");
    }

    #[test]
    fn outside_click_respects_triggers() {
        let mut bar = empty_bar();
        bar.open_add_filter();
        bar.set_filter_search("pri");
        bar.select_filter("price");

        bar.outside_click(ClickTarget::Trigger);
        assert!(bar.is_open());
        bar.outside_click(ClickTarget::InsidePopover);
        assert!(bar.is_open());

        bar.outside_click(ClickTarget::Elsewhere);
        assert!(!bar.is_open());
        assert!(bar.draft().is_none());
        assert_eq!(bar.filter_search(), "");
        assert!(bar.applied().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut bar = FilterBar::with_applied(AccountMode::Vendor, Vec::new());
        assert!(!bar.select_filter("fulfillmentChannel"));
        assert!(!bar.edit_chip("price"));
        assert!(!bar.remove("price"));
        assert_eq!(bar.editor(), &EditorState::Closed);
    }

    #[test]
    fn mode_switch_prunes_and_closes_stale_editor() {
        let mut bar = empty_bar();
        bar.select_filter("fulfillmentChannel");
        bar.toggle_option("FBA");
        bar.apply();
        bar.select_filter("price");
        bar.apply();
        bar.edit_chip("fulfillmentChannel");

        bar.set_mode(AccountMode::Vendor);
        let keys: Vec<_> = bar.applied().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["price"]);
        assert_eq!(bar.editor(), &EditorState::Closed);
    }

    #[test]
    fn mode_switch_keeps_valid_editor_open() {
        let mut bar = empty_bar();
        bar.select_filter("price");
        bar.set_mode(AccountMode::Both);
        assert!(bar.is_open());
        assert!(bar.draft().is_some());
    }
}
