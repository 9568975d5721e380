use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ProductTableViewModel {
    pub mode: String,
    pub score_label: String,
    pub score_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<ProductRowViewModel>,
    pub selected_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductRowViewModel {
    pub id: u32,
    pub selected: bool,
    pub score: u8,
    pub score_color: String,
    pub tags: Vec<TagBadgeViewModel>,
    pub cells: Vec<CellViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagBadgeViewModel {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellViewModel {
    pub column_id: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_positive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub path: String,
    pub rows: usize,
    pub columns: usize,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProductTableViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::products::ProductTableView;
        Box::new(ProductTableView::new(self, mode))
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::products::ExportResultView;
        Box::new(ExportResultView::new(self))
    }
}
