use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ColumnListViewModel {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_preset: Option<String>,
    pub presets: Vec<String>,
    pub columns: Vec<ColumnEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ColumnEntryViewModel {
    pub id: String,
    pub label: String,
    pub category: String,
    pub visible: bool,
    pub locked: bool,
    pub sticky: bool,
}

impl ColumnListViewModel {
    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|c| c.visible).count()
    }
}

impl CreateView for ColumnListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::columns::ColumnListView;
        Box::new(ColumnListView::new(self, mode))
    }
}
