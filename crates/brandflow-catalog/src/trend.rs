use chrono::NaiveDate;
use serde::Serialize;
use std::sync::LazyLock;

/// One sample of the trend chart. Base series are recorded; the rest are
/// derived from them when the table is first built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub impressions: f64,
    pub organic_sales: f64,
    pub order: f64,
    pub acos: f64,
    pub volume: f64,
    pub ad_sales: f64,
    pub sales: f64,
    pub shipped_revenue: f64,
    pub shipped_units: f64,
    pub sessions: f64,
    pub page_views: f64,
    pub roas: f64,
    pub clicks: f64,
    pub buy_box_pct: f64,
}

impl TrendPoint {
    /// Axis label such as "Jan 5"
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }

    /// Series value by chart data key
    pub fn value(&self, data_key: &str) -> Option<f64> {
        let v = match data_key {
            "impressions" => self.impressions,
            "organicSales" => self.organic_sales,
            "order" => self.order,
            "acos" => self.acos,
            "volume" => self.volume,
            "adSales" => self.ad_sales,
            "sales" => self.sales,
            "shippedRevenue" => self.shipped_revenue,
            "shippedUnits" => self.shipped_units,
            "sessions" => self.sessions,
            "pageViews" => self.page_views,
            "roas" => self.roas,
            "clicks" => self.clicks,
            "buyBoxPct" => self.buy_box_pct,
            _ => return None,
        };
        Some(v)
    }
}

// (day of January, impressions, organic sales, orders, acos, volume)
const BASE_SERIES: &[(u32, f64, f64, f64, f64, f64)] = &[
    (1, 145_000.0, 27_000.0, 1_200.0, 22.5, 450.0),
    (5, 182_000.0, 31_000.0, 1_350.0, 21.8, 520.0),
    (10, 168_000.0, 28_500.0, 1_280.0, 23.2, 480.0),
    (15, 221_000.0, 37_000.0, 1_680.0, 20.5, 610.0),
    (20, 198_000.0, 35_000.0, 1_580.0, 21.1, 580.0),
    (25, 271_000.0, 43_000.0, 1_910.0, 19.3, 710.0),
    (30, 1_245_680.0, 76_350.0, 2_140.0, 18.5, 750.0),
];

const TREND_YEAR: i32 = 2025;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn build_points() -> Vec<TrendPoint> {
    BASE_SERIES
        .iter()
        .enumerate()
        .filter_map(|(index, &(day, impressions, organic_sales, order, acos, volume))| {
            let i = index as f64;
            let date = NaiveDate::from_ymd_opt(TREND_YEAR, 1, day)?;
            Some(TrendPoint {
                date,
                impressions,
                organic_sales,
                order,
                acos,
                volume,
                ad_sales: (organic_sales * 0.42 + (index % 3) as f64 * 1200.0).round(),
                sales: organic_sales,
                shipped_revenue: (organic_sales * 1.16).round(),
                shipped_units: (order * 1.12).round(),
                sessions: (impressions * 0.11).round(),
                page_views: (impressions * 0.16).round(),
                roas: round_to(2.4 + (index % 5) as f64 * 0.22, 2),
                clicks: (impressions * 0.028 + i * 150.0).round(),
                buy_box_pct: round_to(96.2 + (index % 4) as f64 * 0.6, 1),
            })
        })
        .collect()
}

static TREND_POINTS: LazyLock<Vec<TrendPoint>> = LazyLock::new(build_points);

pub fn trend_points() -> &'static [TrendPoint] {
    &TREND_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_points_spanning_january() {
        let points = trend_points();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].label(), "Jan 1");
        assert_eq!(points[6].label(), "Jan 30");
    }

    #[test]
    fn derived_series() {
        let p = &trend_points()[1];
        assert_eq!(p.ad_sales, 14_220.0); // 31000*0.42 + 1200
        assert_eq!(p.shipped_revenue, 35_960.0);
        assert_eq!(p.shipped_units, 1_512.0);
        assert_eq!(p.sessions, 20_020.0);
        assert_eq!(p.page_views, 29_120.0);
        assert_eq!(p.roas, 2.62);
        assert_eq!(p.clicks, 5_246.0);
        assert_eq!(p.buy_box_pct, 96.8);
    }

    #[test]
    fn lookup_by_data_key() {
        let last = &trend_points()[6];
        assert_eq!(last.value("organicSales"), Some(76_350.0));
        assert_eq!(last.value("order"), Some(2_140.0));
        assert_eq!(last.value("unknown"), None);
    }
}
