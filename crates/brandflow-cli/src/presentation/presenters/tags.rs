use brandflow_engine::ProductTable;

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TagCreateViewModel, TagEntryViewModel,
    TagListViewModel,
};

pub fn present_tag_list(
    table: &ProductTable,
    query: Option<&str>,
) -> CommandResultViewModel<TagListViewModel> {
    let store = table.tag_store();
    let needle = query.unwrap_or("");
    let tags: Vec<TagEntryViewModel> = store
        .search(needle)
        .into_iter()
        .map(|tag| TagEntryViewModel {
            name: tag.name.clone(),
            color: tag.color.clone(),
            product_count: table
                .products()
                .iter()
                .filter(|p| p.has_tag(&tag.name))
                .count(),
        })
        .collect();

    let can_create = store.can_create(needle);
    let content = TagListViewModel {
        query: query.map(str::to_string),
        tags,
        can_create,
    };

    let count = content.tags.len();
    let mut result = CommandResultViewModel::new(content);
    if count == 0 {
        result = result.with_badge(StatusBadge::info("No tags found"));
    } else {
        result = result.with_badge(StatusBadge::success(format!("{} tag(s)", count)));
    }
    if can_create {
        result = result.with_suggestion(
            Guidance::new(format!("Create \"{}\"", needle.trim()))
                .with_command(fmt::tags_create(needle.trim())),
        );
    }
    result
}

pub fn present_tag_create(
    table: &ProductTable,
    name: &str,
    created: bool,
) -> CommandResultViewModel<TagCreateViewModel> {
    let store = table.tag_store();
    let color = store.color_of(name).unwrap_or_default().to_string();
    let content = TagCreateViewModel {
        name: name.to_string(),
        color,
        created,
        total_tags: store.tags().len(),
    };

    let badge = if created {
        StatusBadge::success(format!("Created tag \"{}\"", name))
    } else {
        StatusBadge::info(format!("Tag \"{}\" already exists", name))
    };
    CommandResultViewModel::new(content).with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_query_offers_creation() {
        let table = ProductTable::default();
        let result = present_tag_list(&table, Some("Clearance"));
        assert!(result.content.can_create);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("brandflow tags create \"Clearance\"")
        );
    }

    #[test]
    fn test_empty_query_lists_every_tag() {
        let table = ProductTable::default();
        let result = present_tag_list(&table, None);
        assert_eq!(result.content.tags.len(), table.tag_store().tags().len());
        assert!(!result.content.can_create);
    }
}
