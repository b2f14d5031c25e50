use serde::{Deserialize, Serialize};

/// A short heuristic suggestion produced by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    /// Not required to be liked, nor to exist in the catalog.
    pub related_techs: Vec<String>,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, title: &str, description: &str, related: &[&str]) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            related_techs: related.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Complementary addition that pairs well with something already liked.
    Synergy,
    /// An adjacent skill worth acquiring.
    Learning,
    /// Replace or augment a liked technology with a more advanced one.
    Upgrade,
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synergy => write!(f, "synergy"),
            Self::Learning => write!(f, "learning"),
            Self::Upgrade => write!(f, "upgrade"),
        }
    }
}
