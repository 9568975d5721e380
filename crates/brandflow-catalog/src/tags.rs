use brandflow_types::Tag;

/// Colour given to tags created without an explicit choice
pub const DEFAULT_TAG_COLOR: &str = "#3B82F6";

pub const COLOR_PALETTE: &[&str] = &[
    "#9CA3AF", "#64748B", "#EF4444", "#F97316", "#EAB308", "#22C55E", "#3B82F6", "#8B5CF6",
];

const INITIAL_TAGS: &[(&str, &str)] = &[
    ("Best Seller", "#EF4444"),
    ("High Rated", "#F59E0B"),
    ("Discounted", "#10B981"),
    ("New Arrival", "#3B82F6"),
    ("Multi-pack", "#8B5CF6"),
    ("Organic", "#EC4899"),
    ("Seasonal", "#6366f1"),
    ("Fragile", "#f43f5e"),
];

/// Seed dictionary for the tag store, in display order
pub fn initial_tags() -> Vec<Tag> {
    INITIAL_TAGS
        .iter()
        .map(|(name, color)| Tag::new(*name, *color))
        .collect()
}
