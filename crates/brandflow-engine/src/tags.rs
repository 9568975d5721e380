use brandflow_catalog::{DEFAULT_TAG_COLOR, initial_tags};
use brandflow_types::{Product, Tag};
use tracing::debug;

/// Insertion-ordered tag dictionary keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStore {
    tags: Vec<Tag>,
}

impl Default for TagStore {
    fn default() -> Self {
        Self {
            tags: initial_tags(),
        }
    }
}

impl TagStore {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|t| t.color.as_str())
    }

    fn find_case_insensitive(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.matches_name(name))
    }

    /// Create a tag and return the key to use.
    ///
    /// Blank names yield `None`. A name that already exists in any casing
    /// returns the existing key without touching the store.
    pub fn create(&mut self, name: &str, color: Option<&str>) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        if let Some(existing) = self.find_case_insensitive(name) {
            return Some(existing.name.clone());
        }
        let tag = Tag::new(name, color.unwrap_or(DEFAULT_TAG_COLOR));
        debug!(name, color = %tag.color, "tag created");
        self.tags.push(tag);
        Some(name.to_string())
    }

    /// Rename and/or recolour a tag, carrying the rename into product tag lists.
    ///
    /// Renaming onto a name that already exists recolours that entry and drops
    /// the old one.
    pub fn update(&mut self, old: &str, new: &str, color: &str, products: &mut [Product]) {
        let target = self.tags.iter().position(|t| t.name == new);
        let source = self.tags.iter().position(|t| t.name == old);
        match (target, source) {
            (Some(idx), _) => {
                self.tags[idx].color = color.to_string();
                if old != new {
                    self.tags.retain(|t| t.name != old);
                }
            }
            (None, Some(idx)) => self.tags[idx] = Tag::new(new, color),
            (None, None) => self.tags.push(Tag::new(new, color)),
        }
        if old != new {
            for product in products.iter_mut() {
                for tag in product.tags.iter_mut() {
                    if tag == old {
                        *tag = new.to_string();
                    }
                }
                dedup_in_place(&mut product.tags);
            }
        }
        debug!(old, new, color, "tag updated");
    }

    /// Remove a tag from the dictionary and from every product
    pub fn delete(&mut self, name: &str, products: &mut [Product]) {
        self.tags.retain(|t| t.name != name);
        for product in products.iter_mut() {
            product.tags.retain(|t| t != name);
        }
        debug!(name, "tag deleted");
    }

    /// Tags whose name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Tag> {
        let needle = query.to_lowercase();
        self.tags
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether the search text would offer a "Create" entry
    pub fn can_create(&self, query: &str) -> bool {
        !query.is_empty() && self.find_case_insensitive(query).is_none()
    }
}

/// Add the tag to the product if missing, remove it otherwise
pub fn toggle_on_product(product: &mut Product, tag: &str) {
    match product.tags.iter().position(|t| t == tag) {
        Some(idx) => {
            product.tags.remove(idx);
        }
        None => product.tags.push(tag.to_string()),
    }
}

fn dedup_in_place(tags: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));
}
