pub mod cmd {
    pub const CONFIG_INIT: &str = "brandflow config init";
    pub const CONFIG_SHOW: &str = "brandflow config show";
    pub const METRICS_LIST: &str = "brandflow metrics list";
    pub const METRICS_CHART: &str = "brandflow metrics chart";
    pub const COLUMNS_LIST: &str = "brandflow columns list";
    pub const PRODUCTS: &str = "brandflow products";
    pub const FILTERS_CATALOG: &str = "brandflow filters catalog";
    pub const FILTERS_CHIPS: &str = "brandflow filters chips";
    pub const DASHBOARD: &str = "brandflow dashboard";
}

pub mod fmt {
    pub fn tags_create(name: &str) -> String {
        format!("brandflow tags create \"{}\"", name)
    }

    pub fn columns_preset(name: &str) -> String {
        format!("brandflow columns list --preset {}", name.to_lowercase())
    }

    pub fn products_preset(name: &str) -> String {
        format!("brandflow products --preset {}", name.to_lowercase())
    }

    pub fn with_mode(cmd: &str, mode: &str) -> String {
        format!("{} --mode {}", cmd, mode)
    }
}
