use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FilterCatalogViewModel {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sections: Vec<CatalogSectionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CatalogSectionViewModel {
    pub label: String,
    pub entries: Vec<CatalogEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntryViewModel {
    pub key: String,
    pub label: String,
    pub filter_type: String,
    pub badge: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterChipsViewModel {
    pub mode: String,
    pub chips: Vec<ChipViewModel>,
    pub visible: usize,
    pub hidden: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_label: Option<String>,
    pub row_width: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipViewModel {
    pub key: String,
    pub text: String,
    pub width: u16,
}

#[derive(Debug, Serialize)]
pub struct FilterPreviewViewModel {
    pub key: String,
    pub label: String,
    pub filter_type: String,
    pub chip: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionViewModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_preview: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OptionViewModel {
    pub value: String,
    pub selected: bool,
    /// Pill colour, tag options only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for FilterCatalogViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::filters::FilterCatalogView;
        Box::new(FilterCatalogView::new(self, mode))
    }
}

impl CreateView for FilterChipsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::filters::FilterChipsView;
        Box::new(FilterChipsView::new(self, mode))
    }
}

impl CreateView for FilterPreviewViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::filters::FilterPreviewView;
        Box::new(FilterPreviewView::new(self))
    }
}
