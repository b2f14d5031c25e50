//! Extract an [`AiRecommendationPayload`] from free-form model output.
//!
//! Models are asked for bare JSON but often wrap it in code fences or add
//! prose around it. The strategies below are tried in order and the first
//! one that yields a JSON object wins. Normalisation happens while
//! converting, so every returned payload has well-formed sections.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::model::{AiRecommendationPayload, LearningResource, ResourceKind, TechSuggestion};

/// Name given to project ideas that arrive without one.
pub const DEFAULT_IDEA_NAME: &str = "Project Idea";
const DEFAULT_IDEA_DESCRIPTION: &str = "A project using your selected technologies.";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s+|\s+```|```").unwrap());

pub type Strategy = fn(&str) -> Option<AiRecommendationPayload>;

/// Parsing strategies in the order they are tried.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", direct),
    ("strip_code_fences", strip_code_fences),
    ("first_brace_block", first_brace_block),
];

/// First strategy that produces a payload, or `None` when all fail.
pub fn parse_payload(text: &str) -> Option<AiRecommendationPayload> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let payload = strategy(text)?;
        tracing::debug!(strategy = name, "parsed advice payload");
        Some(payload)
    })
}

/// Like [`parse_payload`], but on failure returns an empty payload that
/// carries the original text in `raw_text`.
pub fn parse_or_raw(text: &str) -> AiRecommendationPayload {
    parse_payload(text).unwrap_or_else(|| {
        tracing::warn!(len = text.len(), "no parse strategy matched, returning raw text");
        AiRecommendationPayload::raw(text)
    })
}

/// The trimmed text is a JSON object.
pub fn direct(text: &str) -> Option<AiRecommendationPayload> {
    from_json_object(text.trim())
}

/// The text is a JSON object once code-fence markers are removed.
pub fn strip_code_fences(text: &str) -> Option<AiRecommendationPayload> {
    let cleaned = CODE_FENCE.replace_all(text, "");
    from_json_object(cleaned.trim())
}

/// The first balanced `{...}` block in the text that is a JSON object.
/// Text after the block, braces included, is ignored.
pub fn first_brace_block(text: &str) -> Option<AiRecommendationPayload> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match values.next()? {
            Ok(Value::Object(map)) => Some(normalize(&map)),
            _ => None,
        }
    })
}

fn from_json_object(text: &str) -> Option<AiRecommendationPayload> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(map) => Some(normalize(&map)),
        _ => None,
    }
}

/// Convert a loosely shaped JSON object into a payload. Missing or
/// non-array sections become empty; a string `rawText` is carried over.
pub fn normalize(map: &Map<String, Value>) -> AiRecommendationPayload {
    let section = |key: &str| -> Vec<TechSuggestion> {
        array(map, key)
            .iter()
            .filter_map(|item| item.as_object().map(suggestion_from_object))
            .collect()
    };

    AiRecommendationPayload {
        frontend: section("frontend"),
        backend: section("backend"),
        database: section("database"),
        cloud: section("cloud"),
        project_ideas: array(map, "projectIdeas")
            .iter()
            .map(project_idea)
            .collect(),
        raw_text: map.get("rawText").and_then(Value::as_str).map(str::to_string),
    }
}

fn array<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn suggestion_from_object(obj: &Map<String, Value>) -> TechSuggestion {
    TechSuggestion {
        name: string_field(obj, "name"),
        description: string_field(obj, "description"),
        resources: array(obj, "resources")
            .iter()
            .filter_map(Value::as_object)
            .map(resource_from_object)
            .collect(),
    }
}

fn resource_from_object(obj: &Map<String, Value>) -> LearningResource {
    let kind = obj
        .get("type")
        .cloned()
        .and_then(|v| serde_json::from_value::<ResourceKind>(v).ok())
        .unwrap_or_default();
    LearningResource {
        name: string_field(obj, "name"),
        url: string_field(obj, "url"),
        kind,
    }
}

/// Objects with both `name` and `description` are kept. A string
/// `"Name: details"` is split on the first `": "`. Anything else becomes a
/// placeholder idea.
fn project_idea(item: &Value) -> TechSuggestion {
    match item {
        Value::Object(obj) if obj.contains_key("name") && obj.contains_key("description") => {
            suggestion_from_object(obj)
        }
        Value::String(text) => {
            let name = match text.split_once(": ") {
                Some((name, _)) => name,
                None => DEFAULT_IDEA_NAME,
            };
            TechSuggestion::new(name, text)
        }
        _ => TechSuggestion::new(DEFAULT_IDEA_NAME, DEFAULT_IDEA_DESCRIPTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = r#"{
        "frontend": [{"name": "SwiftUI", "description": "Declarative UI.",
                      "resources": [{"name": "Docs", "url": "https://developer.apple.com", "type": "documentation"}]}],
        "backend": [{"name": "CloudKit", "description": "Sync."}],
        "database": [],
        "cloud": [{"name": "TestFlight", "description": "Beta testing."}],
        "projectIdeas": [{"name": "Habit Tracker", "description": "Track habits."}]
    }"#;

    #[test]
    fn test_direct_parse() {
        let payload = direct(CLEAN).unwrap();
        assert_eq!(payload.frontend[0].name, "SwiftUI");
        assert_eq!(payload.frontend[0].resources[0].kind, ResourceKind::Documentation);
        assert!(payload.database.is_empty());
        assert!(payload.raw_text.is_none());
    }

    #[test]
    fn test_fenced_json() {
        let text = format!("```json\n{CLEAN}\n```");
        assert!(direct(&text).is_none());
        let payload = strip_code_fences(&text).unwrap();
        assert_eq!(payload.backend[0].name, "CloudKit");
        assert_eq!(parse_payload(&text).unwrap(), payload);
    }

    #[test]
    fn test_bare_fence_markers() {
        let text = format!("```\n{CLEAN}```");
        assert!(strip_code_fences(&text).is_some());
    }

    #[test]
    fn test_prose_around_json() {
        let text = format!("Sure! Here are your recommendations:\n{CLEAN}\nHope this helps.");
        assert!(direct(&text).is_none());
        assert!(strip_code_fences(&text).is_none());
        let payload = first_brace_block(&text).unwrap();
        assert_eq!(payload.cloud[0].name, "TestFlight");
        // Nested objects stay inside the block
        assert_eq!(payload.frontend[0].resources.len(), 1);
    }

    #[test]
    fn test_braces_in_trailing_prose() {
        let text = r#"Here: {"frontend":[{"name":"A","description":"b"}]} and a note {x}"#;
        let payload = parse_payload(text).unwrap();
        assert_eq!(payload.frontend[0].name, "A");
        assert_eq!(payload.frontend[0].description, "b");
    }

    #[test]
    fn test_braces_in_leading_prose() {
        let text = format!("Use {{placeholders}} freely.\n{CLEAN}\nDone {{ok}}");
        let payload = first_brace_block(&text).unwrap();
        assert_eq!(payload.backend[0].name, "CloudKit");
    }

    #[test]
    fn test_no_object_anywhere() {
        assert!(first_brace_block("{not json} and {also not}").is_none());
        assert!(first_brace_block("no braces at all").is_none());
    }

    #[test]
    fn test_non_object_json_rejected() {
        assert!(direct("[1, 2, 3]").is_none());
        assert!(parse_payload("\"just a string\"").is_none());
    }

    #[test]
    fn test_parse_or_raw_keeps_text() {
        let payload = parse_or_raw("I cannot help with that.");
        assert!(payload.is_empty());
        assert_eq!(payload.raw_text.as_deref(), Some("I cannot help with that."));
    }

    #[test]
    fn test_missing_and_wrong_sections_become_empty() {
        let payload = direct(r#"{"frontend": "React", "cloud": null}"#).unwrap();
        assert!(payload.is_empty());
        assert!(payload.raw_text.is_none());
    }

    #[test]
    fn test_raw_text_carried_over() {
        let payload = direct(r#"{"frontend": [], "rawText": "model prose"}"#).unwrap();
        assert!(payload.is_empty());
        assert_eq!(payload.raw_text.as_deref(), Some("model prose"));
    }

    #[test]
    fn test_non_object_section_entries_dropped() {
        let payload =
            direct(r#"{"backend": ["Express", {"name": "Ktor", "description": "Kotlin server."}, 3]}"#)
                .unwrap();
        assert_eq!(payload.backend.len(), 1);
        assert_eq!(payload.backend[0].name, "Ktor");
        assert!(payload.backend[0].resources.is_empty());
    }

    #[test]
    fn test_project_idea_strings() {
        let payload = direct(
            r#"{"projectIdeas": ["Recipe Box: Save recipes: and share them", "Build a chat app"]}"#,
        )
        .unwrap();
        let ideas = &payload.project_ideas;
        assert_eq!(ideas[0].name, "Recipe Box");
        assert_eq!(ideas[0].description, "Recipe Box: Save recipes: and share them");
        assert_eq!(ideas[1].name, DEFAULT_IDEA_NAME);
        assert_eq!(ideas[1].description, "Build a chat app");
    }

    #[test]
    fn test_project_idea_other_shapes() {
        let payload = direct(r#"{"projectIdeas": [42, {"name": "No description"}, null]}"#).unwrap();
        assert_eq!(payload.project_ideas.len(), 3);
        for idea in &payload.project_ideas {
            assert_eq!(idea.name, DEFAULT_IDEA_NAME);
            assert_eq!(idea.description, DEFAULT_IDEA_DESCRIPTION);
        }
    }

    #[test]
    fn test_unknown_resource_type_defaults() {
        let payload = direct(
            r#"{"cloud": [{"name": "Fly.io", "description": "Edge hosting.",
                "resources": [{"name": "Blog", "url": "https://fly.io/blog", "type": "podcast"}, "junk"]}]}"#,
        )
        .unwrap();
        let resources = &payload.cloud[0].resources;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].kind, ResourceKind::Documentation);
    }

    #[test]
    fn test_code_fence_pattern_compiles() {
        assert!(CODE_FENCE.is_match("```json\n{}"));
        assert!(!CODE_FENCE.is_match("{}"));
    }

    #[test]
    fn test_strategy_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["direct", "strip_code_fences", "first_brace_block"]);
    }
}
