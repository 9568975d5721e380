use serde::{Deserialize, Serialize};

use super::{DateOperator, FilterType, MatchMode, NumberOperator};

/// Typed payload of an applied filter or draft.
///
/// Serialised with a `type` tag so that an applied filter flattens into the
/// `{key, type, value | operator/value1/value2, match}` record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterValue {
    Multi {
        #[serde(rename = "value", default)]
        values: Vec<String>,
        #[serde(rename = "match", default)]
        match_mode: MatchMode,
    },
    Number {
        operator: NumberOperator,
        #[serde(default)]
        value1: String,
        #[serde(default)]
        value2: String,
    },
    Date {
        operator: DateOperator,
        #[serde(default)]
        value1: String,
        #[serde(default)]
        value2: String,
    },
    Text {
        #[serde(default)]
        value1: String,
    },
}

impl FilterValue {
    /// Empty payload for a filter that has never been applied
    pub fn default_for(filter_type: FilterType) -> Self {
        match filter_type {
            FilterType::Multi => FilterValue::Multi {
                values: Vec::new(),
                match_mode: MatchMode::Any,
            },
            FilterType::Number => FilterValue::Number {
                operator: NumberOperator::default(),
                value1: String::new(),
                value2: String::new(),
            },
            FilterType::Date => FilterValue::Date {
                operator: DateOperator::default(),
                value1: String::new(),
                value2: String::new(),
            },
            FilterType::Text => FilterValue::Text {
                value1: String::new(),
            },
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            FilterValue::Multi { .. } => FilterType::Multi,
            FilterValue::Number { .. } => FilterType::Number,
            FilterValue::Date { .. } => FilterType::Date,
            FilterValue::Text { .. } => FilterType::Text,
        }
    }

    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Multi {
            values: values.into_iter().map(Into::into).collect(),
            match_mode: MatchMode::Any,
        }
    }

    pub fn number(operator: NumberOperator, value1: impl Into<String>, value2: impl Into<String>) -> Self {
        FilterValue::Number {
            operator,
            value1: value1.into(),
            value2: value2.into(),
        }
    }

    pub fn date(operator: DateOperator, value1: impl Into<String>, value2: impl Into<String>) -> Self {
        FilterValue::Date {
            operator,
            value1: value1.into(),
            value2: value2.into(),
        }
    }

    pub fn text(value1: impl Into<String>) -> Self {
        FilterValue::Text {
            value1: value1.into(),
        }
    }

    /// Selected options for multi filters, empty for every other type
    pub fn selected(&self) -> &[String] {
        match self {
            FilterValue::Multi { values, .. } => values,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub key: String,
    #[serde(flatten)]
    pub value: FilterValue,
}

impl AppliedFilter {
    pub fn new(key: impl Into<String>, value: FilterValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn filter_type(&self) -> FilterType {
        self.value.filter_type()
    }
}

/// Editing buffer for a single filter; committed whole or discarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub key: String,
    #[serde(flatten)]
    pub value: FilterValue,
}

impl Draft {
    pub fn new(key: impl Into<String>, value: FilterValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl From<&AppliedFilter> for Draft {
    fn from(applied: &AppliedFilter) -> Self {
        Draft {
            key: applied.key.clone(),
            value: applied.value.clone(),
        }
    }
}

impl From<Draft> for AppliedFilter {
    fn from(draft: Draft) -> Self {
        AppliedFilter {
            key: draft.key,
            value: draft.value,
        }
    }
}
