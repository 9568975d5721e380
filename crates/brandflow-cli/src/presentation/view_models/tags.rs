use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagListViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub tags: Vec<TagEntryViewModel>,
    pub can_create: bool,
}

#[derive(Debug, Serialize)]
pub struct TagEntryViewModel {
    pub name: String,
    pub color: String,
    pub product_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TagCreateViewModel {
    pub name: String,
    pub color: String,
    pub created: bool,
    pub total_tags: usize,
}
