use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MetricCategory {
    Revenue,
    Advertising,
    Orders,
    Performance,
    Traffic,
    Other,
}

impl MetricCategory {
    pub const fn accent_color(&self) -> &'static str {
        match self {
            MetricCategory::Revenue => "#22c55e",
            MetricCategory::Advertising => "#10b981",
            MetricCategory::Orders => "#ec4899",
            MetricCategory::Performance => "#38bdf8",
            MetricCategory::Traffic => "#f59e0b",
            MetricCategory::Other => "#94a3b8",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Revenue => "Revenue",
            MetricCategory::Advertising => "Advertising",
            MetricCategory::Orders => "Orders",
            MetricCategory::Performance => "Performance",
            MetricCategory::Traffic => "Traffic",
            MetricCategory::Other => "Other",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which vertical axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxis {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartValueType {
    Number,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderAs {
    #[default]
    Line,
    Bar,
}

/// Binds a metric to a series of the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartBinding {
    pub data_key: &'static str,
    pub y_axis: YAxis,
    pub value_type: ChartValueType,
    pub render_as: RenderAs,
}

impl ChartBinding {
    pub const fn line(data_key: &'static str, y_axis: YAxis, value_type: ChartValueType) -> Self {
        Self {
            data_key,
            y_axis,
            value_type,
            render_as: RenderAs::Line,
        }
    }

    pub const fn bar(data_key: &'static str, y_axis: YAxis, value_type: ChartValueType) -> Self {
        Self {
            data_key,
            y_axis,
            value_type,
            render_as: RenderAs::Bar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricChange {
    pub value: &'static str,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub category: MetricCategory,
    pub accent_color: &'static str,
    pub value: &'static str,
    pub previous_value: &'static str,
    pub change: MetricChange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartBinding>,
}

impl MetricDefinition {
    /// Placeholder card: "-" values, flat change, accent taken from the category
    pub const fn new(id: &'static str, label: &'static str, category: MetricCategory) -> Self {
        Self {
            id,
            label,
            category,
            accent_color: category.accent_color(),
            value: "-",
            previous_value: "-",
            change: MetricChange {
                value: "0.0%",
                is_positive: true,
            },
            chart: None,
        }
    }

    pub const fn with_stats(
        mut self,
        value: &'static str,
        previous_value: &'static str,
        change: &'static str,
        is_positive: bool,
    ) -> Self {
        self.value = value;
        self.previous_value = previous_value;
        self.change = MetricChange {
            value: change,
            is_positive,
        };
        self
    }

    pub const fn with_chart(mut self, chart: ChartBinding) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn is_chartable(&self) -> bool {
        self.chart.is_some()
    }
}
