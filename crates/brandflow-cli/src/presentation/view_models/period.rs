use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PeriodViewModel {
    pub label: String,
    pub from: String,
    pub to: String,
    pub range: String,
    pub days: i64,
    pub custom: bool,
    pub presets: Vec<PeriodPresetViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PeriodPresetViewModel {
    pub name: String,
    pub label: String,
    pub range: String,
    pub active: bool,
}
