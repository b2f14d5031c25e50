use std::str::FromStr;

use crate::model::*;

#[test]
fn test_category_display_roundtrip() {
    for category in Category::ALL {
        let s = category.to_string();
        let parsed = Category::from_str(&s).unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn test_category_from_str_case_insensitive() {
    assert_eq!(Category::from_str(" DevOps ").unwrap(), Category::Devops);
    assert_eq!(Category::from_str("Frontend").unwrap(), Category::Frontend);
}

#[test]
fn test_category_from_str_unknown() {
    let err = Category::from_str("blockchain").unwrap_err();
    assert!(err.to_string().contains("unknown category"));
    assert!(err.to_string().contains("frontend"));
}

#[test]
fn test_category_serde_lowercase() {
    let json = serde_json::to_string(&Category::Devops).unwrap();
    assert_eq!(json, "\"devops\"");
}

#[test]
fn test_technology_skips_empty_pros_cons() {
    let tech = Technology::new("rust", "Rust", Category::Language, "Systems language.");
    let json = serde_json::to_value(&tech).unwrap();
    assert!(json.get("pros").is_none());
    assert!(json.get("cons").is_none());

    let tech = tech.with_pros(&["fast"]).with_cons(&["steep learning curve"]);
    let json = serde_json::to_value(&tech).unwrap();
    assert_eq!(json["pros"][0], "fast");
    assert_eq!(json["cons"][0], "steep learning curve");
}

#[test]
fn test_technology_deserialize_without_pros() {
    let tech: Technology = serde_json::from_str(
        r#"{"id":"go","name":"Go","category":"language","description":"Compiled."}"#,
    )
    .unwrap();
    assert_eq!(tech.category, Category::Language);
    assert!(tech.pros.is_empty());
}

#[test]
fn test_recommendation_wire_names() {
    let rec = Recommendation::new(
        RecommendationKind::Upgrade,
        "Level Up with TypeScript",
        "Static types.",
        &["typescript", "javascript"],
    );
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["type"], "upgrade");
    assert_eq!(json["relatedTechs"][0], "typescript");
    assert!(json.get("related_techs").is_none());
}

#[test]
fn test_stack_match_ratio() {
    let m = StackMatch {
        key: "T3".into(),
        matched: 3,
        total: 4,
    };
    assert!((m.ratio() - 0.75).abs() < f32::EPSILON);

    let empty = StackMatch {
        key: "none".into(),
        matched: 0,
        total: 0,
    };
    assert_eq!(empty.ratio(), 0.0);
}

#[test]
fn test_archetype_contains() {
    let stack = StackArchetype::new(
        "MERN",
        "MERN Stack",
        "JS full stack",
        StackColor::Blue,
        &["react", "express", "mongodb", "nodejs"],
    );
    assert!(stack.contains("mongodb"));
    assert!(!stack.contains("postgres"));
    assert!(stack.share_text().contains("the MERN Stack on StackSwipe"));
}

#[test]
fn test_payload_wire_names() {
    let payload = AiRecommendationPayload {
        project_ideas: vec![TechSuggestion::new("Tracker", "Track things.")],
        ..Default::default()
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["projectIdeas"][0]["name"], "Tracker");
    assert!(json.get("rawText").is_none());
    assert!(json["frontend"].as_array().unwrap().is_empty());
}

#[test]
fn test_payload_raw_is_empty() {
    let payload = AiRecommendationPayload::raw("the model rambled");
    assert!(payload.is_empty());
    assert_eq!(payload.raw_text.as_deref(), Some("the model rambled"));
}

#[test]
fn test_resource_kind_defaults_to_documentation() {
    let res: LearningResource =
        serde_json::from_str(r#"{"name":"Docs","url":"https://example.com"}"#).unwrap();
    assert_eq!(res.kind, ResourceKind::Documentation);

    let res: LearningResource =
        serde_json::from_str(r#"{"name":"Forum","url":"https://example.com","type":"community"}"#)
            .unwrap();
    assert_eq!(res.kind, ResourceKind::Community);
}

#[test]
fn test_advisor_request_wire_name() {
    let req = AdvisorRequest {
        tech_stack: vec!["swift".into()],
    };
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"techStack":["swift"]}"#
    );
}
