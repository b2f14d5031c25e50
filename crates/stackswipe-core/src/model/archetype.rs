use serde::{Deserialize, Serialize};

/// A named, fixed bundle of technologies representing a recognizable stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackArchetype {
    pub key: String,
    pub name: String,
    pub description: String,
    pub color: StackColor,
    pub techs: Vec<String>,
}

impl StackArchetype {
    pub fn new(key: &str, name: &str, description: &str, color: StackColor, techs: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            color,
            techs: techs.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn contains(&self, tech_id: &str) -> bool {
        self.techs.iter().any(|t| t == tech_id)
    }

    /// One-line blurb for sharing a match result.
    pub fn share_text(&self) -> String {
        format!(
            "I matched with the {} on StackSwipe! Check out my perfect tech stack combo!",
            self.name
        )
    }
}

/// Presentation tag only; nothing in the engine branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackColor {
    Blue,
    Purple,
    Pink,
    Orange,
    Green,
}

impl std::fmt::Display for StackColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blue => write!(f, "blue"),
            Self::Purple => write!(f, "purple"),
            Self::Pink => write!(f, "pink"),
            Self::Orange => write!(f, "orange"),
            Self::Green => write!(f, "green"),
        }
    }
}

/// How well a liked set overlaps one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackMatch {
    pub key: String,
    pub matched: usize,
    pub total: usize,
}

impl StackMatch {
    /// Fraction of the archetype's techs that were liked, 0.0 for an empty archetype.
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f32 / self.total as f32
    }
}
