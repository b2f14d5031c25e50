use serde::{Deserialize, Serialize};

use crate::error::{Result, StackSwipeError};

/// A single swipeable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,
}

impl Technology {
    pub fn new(id: &str, name: &str, category: Category, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    pub fn with_pros(mut self, pros: &[&str]) -> Self {
        self.pros = pros.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_cons(mut self, cons: &[&str]) -> Self {
        self.cons = cons.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Database,
    Language,
    Cloud,
    Mobile,
    Devops,
    Tools,
}

impl Category {
    /// Every category, in catalog display order.
    pub const ALL: [Category; 8] = [
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Language,
        Category::Cloud,
        Category::Mobile,
        Category::Devops,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Language => "language",
            Self::Cloud => "cloud",
            Self::Mobile => "mobile",
            Self::Devops => "devops",
            Self::Tools => "tools",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = StackSwipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "database" => Ok(Self::Database),
            "language" => Ok(Self::Language),
            "cloud" => Ok(Self::Cloud),
            "mobile" => Ok(Self::Mobile),
            "devops" => Ok(Self::Devops),
            "tools" => Ok(Self::Tools),
            other => Err(StackSwipeError::InvalidInput(format!(
                "unknown category: '{other}' (expected one of: {})",
                Category::ALL.map(|c| c.as_str()).join(", ")
            ))),
        }
    }
}
