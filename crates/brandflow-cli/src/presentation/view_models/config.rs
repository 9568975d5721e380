use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub default_mode: String,
    pub currency: String,
    pub store: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub channels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

/// Shown when brandflow runs without a subcommand
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_exists: bool,
    pub mode: String,
    pub filter_count: usize,
    pub metric_count: usize,
    pub product_count: usize,
}
