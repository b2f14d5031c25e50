use serde::{Deserialize, Serialize};

/// Structured AI advice, grouped by area. Produced by the recommendations
/// service or synthesized from a canned fallback bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendationPayload {
    #[serde(default)]
    pub frontend: Vec<TechSuggestion>,
    #[serde(default)]
    pub backend: Vec<TechSuggestion>,
    #[serde(default)]
    pub database: Vec<TechSuggestion>,
    #[serde(default)]
    pub cloud: Vec<TechSuggestion>,
    #[serde(default)]
    pub project_ideas: Vec<TechSuggestion>,
    /// Unparsed model output, set only when no structured payload could be extracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl AiRecommendationPayload {
    /// Payload carrying only the raw model text.
    pub fn raw(text: &str) -> Self {
        Self {
            raw_text: Some(text.to_string()),
            ..Default::default()
        }
    }

    /// True when every section is empty (raw text is not counted).
    pub fn is_empty(&self) -> bool {
        self.sections().iter().all(|(_, items)| items.is_empty())
    }

    /// The four technology sections plus project ideas, labelled for display.
    pub fn sections(&self) -> [(&'static str, &[TechSuggestion]); 5] {
        [
            ("frontend", self.frontend.as_slice()),
            ("backend", self.backend.as_slice()),
            ("database", self.database.as_slice()),
            ("cloud", self.cloud.as_slice()),
            ("projectIdeas", self.project_ideas.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSuggestion {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<LearningResource>,
}

impl TechSuggestion {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            resources: Vec::new(),
        }
    }

    pub fn with_resources(mut self, resources: Vec<LearningResource>) -> Self {
        self.resources = resources;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: ResourceKind,
}

impl LearningResource {
    pub fn new(name: &str, url: &str, kind: ResourceKind) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Documentation,
    Tutorial,
    Course,
    Community,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Documentation => write!(f, "documentation"),
            Self::Tutorial => write!(f, "tutorial"),
            Self::Course => write!(f, "course"),
            Self::Community => write!(f, "community"),
        }
    }
}

/// Body of `POST /api/recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorRequest {
    pub tech_stack: Vec<String>,
}

/// Error body returned by the recommendations service on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
