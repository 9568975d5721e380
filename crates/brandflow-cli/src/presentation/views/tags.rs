use std::fmt;

use crate::presentation::view_models::{
    CreateView, TagCreateViewModel, TagListViewModel, ViewMode,
};

impl CreateView for TagListViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TagListView { data: self })
    }
}

struct TagListView<'a> {
    data: &'a TagListViewModel,
}

impl<'a> fmt::Display for TagListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.tags.is_empty() {
            return writeln!(f, "No tags.");
        }

        writeln!(f, "{:<20} {:<9} PRODUCTS", "TAG", "COLOR")?;
        for tag in &self.data.tags {
            writeln!(f, "{:<20} {:<9} {}", tag.name, tag.color, tag.product_count)?;
        }
        Ok(())
    }
}

impl CreateView for TagCreateViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TagCreateView { data: self })
    }
}

struct TagCreateView<'a> {
    data: &'a TagCreateViewModel,
}

impl<'a> fmt::Display for TagCreateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.data.name, self.data.color)?;
        writeln!(f, "{} tag(s) in total", self.data.total_tags)
    }
}
