//! Article identifiers for the Fire Service Act Enforcement Order
//!
//! Each variant corresponds to one equipment-installation article. The
//! engine dispatches to one ordered rule module per article.

use serde::{Deserialize, Serialize};

/// Enforcement Order articles with an implemented rule module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleId {
    /// § 10 — fire extinguishers
    Article10,
    /// § 11 — indoor fire hydrant systems
    Article11,
    /// § 13 — water-spray and equivalent suppression systems
    Article13,
    /// § 21 — automatic fire alarm systems
    Article21,
    /// § 22 — electric-leakage fire alarms
    Article22,
    /// § 23 — fire-department notification equipment
    Article23,
    /// § 24 — emergency alarm apparatus and systems
    Article24,
    /// § 27 — fire-service water supply
    Article27,
}

/// Error returned when an article code cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown or unimplemented article code: {0}")]
pub struct ParseArticleError(pub String);

impl ArticleId {
    /// Numeric article code as it appears in citations.
    pub fn code(&self) -> &'static str {
        match self {
            ArticleId::Article10 => "10",
            ArticleId::Article11 => "11",
            ArticleId::Article13 => "13",
            ArticleId::Article21 => "21",
            ArticleId::Article22 => "22",
            ArticleId::Article23 => "23",
            ArticleId::Article24 => "24",
            ArticleId::Article27 => "27",
        }
    }

    /// Equipment the article mandates.
    pub fn equipment_name(&self) -> &'static str {
        match self {
            ArticleId::Article10 => "fire extinguishers",
            ArticleId::Article11 => "indoor fire hydrant system",
            ArticleId::Article13 => "water-spray or equivalent suppression system",
            ArticleId::Article21 => "automatic fire alarm system",
            ArticleId::Article22 => "electric-leakage fire alarm",
            ArticleId::Article23 => "fire-department notification equipment",
            ArticleId::Article24 => "emergency alarm apparatus",
            ArticleId::Article27 => "fire-service water supply",
        }
    }

    /// Base statutory citation for the article.
    pub fn base_citation(&self) -> String {
        format!("Order § {}", self.code())
    }

    /// Parse from a bare article code such as "21".
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim() {
            "10" => Some(ArticleId::Article10),
            "11" => Some(ArticleId::Article11),
            "13" => Some(ArticleId::Article13),
            "21" => Some(ArticleId::Article21),
            "22" => Some(ArticleId::Article22),
            "23" => Some(ArticleId::Article23),
            "24" => Some(ArticleId::Article24),
            "27" => Some(ArticleId::Article27),
            _ => None,
        }
    }

    /// All implemented articles, in article order.
    pub fn implemented_articles() -> Vec<Self> {
        vec![
            ArticleId::Article10,
            ArticleId::Article11,
            ArticleId::Article13,
            ArticleId::Article21,
            ArticleId::Article22,
            ArticleId::Article23,
            ArticleId::Article24,
            ArticleId::Article27,
        ]
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ArticleId {
    type Err = ParseArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleId::parse_code(s).ok_or_else(|| ParseArticleError(s.to_string()))
    }
}
