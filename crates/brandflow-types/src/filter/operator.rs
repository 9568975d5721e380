use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Comparison operator for number filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberOperator {
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "greater than")]
    GreaterThan,
    #[serde(rename = "less than")]
    LessThan,
    #[serde(rename = "greater than or equal")]
    GreaterThanOrEqual,
    #[serde(rename = "less than or equal")]
    LessThanOrEqual,
    #[serde(rename = "between")]
    Between,
}

impl NumberOperator {
    pub const ALL: [NumberOperator; 6] = [
        NumberOperator::Equals,
        NumberOperator::GreaterThan,
        NumberOperator::LessThan,
        NumberOperator::GreaterThanOrEqual,
        NumberOperator::LessThanOrEqual,
        NumberOperator::Between,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberOperator::Equals => "equals",
            NumberOperator::GreaterThan => "greater than",
            NumberOperator::LessThan => "less than",
            NumberOperator::GreaterThanOrEqual => "greater than or equal",
            NumberOperator::LessThanOrEqual => "less than or equal",
            NumberOperator::Between => "between",
        }
    }

    /// Symbol used in chip labels
    pub fn symbol(&self) -> &'static str {
        match self {
            NumberOperator::Equals => "=",
            NumberOperator::GreaterThan => ">",
            NumberOperator::LessThan => "<",
            NumberOperator::GreaterThanOrEqual => "≥",
            NumberOperator::LessThanOrEqual => "≤",
            NumberOperator::Between => "between",
        }
    }

    pub fn is_between(&self) -> bool {
        matches!(self, NumberOperator::Between)
    }
}

impl Default for NumberOperator {
    fn default() -> Self {
        NumberOperator::GreaterThanOrEqual
    }
}

impl fmt::Display for NumberOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumberOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        NumberOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == needle || op.symbol() == needle)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

/// Comparison operator for date filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOperator {
    Before,
    After,
    Between,
}

impl DateOperator {
    pub const ALL: [DateOperator; 3] = [DateOperator::Before, DateOperator::After, DateOperator::Between];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateOperator::Before => "before",
            DateOperator::After => "after",
            DateOperator::Between => "between",
        }
    }

    /// Capitalised form used in chip labels ("Before", "After", "Between")
    pub fn title(&self) -> &'static str {
        match self {
            DateOperator::Before => "Before",
            DateOperator::After => "After",
            DateOperator::Between => "Between",
        }
    }

    pub fn is_between(&self) -> bool {
        matches!(self, DateOperator::Between)
    }
}

impl Default for DateOperator {
    fn default() -> Self {
        DateOperator::Before
    }
}

impl fmt::Display for DateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(DateOperator::Before),
            "after" => Ok(DateOperator::After),
            "between" => Ok(DateOperator::Between),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

/// How multiple selected tags combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Any,
    All,
}

impl MatchMode {
    /// Connective shown between tags in the match preview
    pub fn connective(&self) -> &'static str {
        match self {
            MatchMode::Any => "OR",
            MatchMode::All => "AND",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Any => write!(f, "any"),
            MatchMode::All => write!(f, "all"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(MatchMode::Any),
            "all" => Ok(MatchMode::All),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_operator_parses_phrase_and_symbol() {
        assert_eq!(
            "greater than or equal".parse::<NumberOperator>(),
            Ok(NumberOperator::GreaterThanOrEqual)
        );
        assert_eq!("≤".parse::<NumberOperator>(), Ok(NumberOperator::LessThanOrEqual));
        assert_eq!("Between".parse::<NumberOperator>(), Ok(NumberOperator::Between));
        assert!(matches!(
            "roughly".parse::<NumberOperator>(),
            Err(Error::UnknownOperator(_))
        ));
    }

    #[test]
    fn number_operator_serializes_as_phrase() {
        let json = serde_json::to_string(&NumberOperator::LessThanOrEqual).unwrap();
        assert_eq!(json, "\"less than or equal\"");
    }

    #[test]
    fn defaults_match_new_draft_defaults() {
        assert_eq!(NumberOperator::default(), NumberOperator::GreaterThanOrEqual);
        assert_eq!(DateOperator::default(), DateOperator::Before);
        assert_eq!(MatchMode::default(), MatchMode::Any);
    }
}
