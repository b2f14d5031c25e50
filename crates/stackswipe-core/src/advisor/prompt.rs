/// JSON shape the model is asked to return. Mirrors `AiRecommendationPayload`.
const RESPONSE_SHAPE: &str = r#"{
  "frontend": [
    {
      "name": "Technology Name",
      "description": "How it complements my stack and why it fits (1-2 sentences)",
      "resources": [
        { "name": "Resource Name", "url": "Resource URL", "type": "documentation|tutorial|course|community" }
      ]
    }
  ],
  "backend": [ same shape as frontend ],
  "database": [ same shape as frontend ],
  "cloud": [ same shape as frontend ],
  "projectIdeas": [
    { "name": "Project Name", "description": "A realistic project using my exact technologies (2-3 sentences)" },
    { "name": "Project Name", "description": "A realistic project using my exact technologies (2-3 sentences)" }
  ]
}"#;

/// Build the instructional prompt for a liked set.
pub fn build_prompt<S: AsRef<str>>(liked: &[S]) -> String {
    let stack = liked
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I'm a developer who likes the following technologies: {stack}.

Based on these preferences, give recommendations that are specific to the \
technologies I picked, not generic suggestions.

First work out my primary domain (web, mobile, data, DevOps, ...), the \
ecosystem I'm in, my apparent experience level, and the gaps in my stack.

Then recommend, per category:
1. Frontend: UI frameworks and libraries for my ecosystem. Mobile-specific \
tools if I picked mobile technologies.
2. Backend: technologies that integrate directly with my frontend or mobile stack.
3. Database: databases with first-class support in my stack.
4. Cloud: deployment targets optimised for my stack.
5. Project Ideas: EXACTLY 2 realistic projects that use my exact choices.

Only recommend technologies that are well documented, used together in \
production, and not already in my list.

Respond with a JSON object with exactly these keys:
{RESPONSE_SHAPE}

Return ONLY the JSON object, with no explanatory text or code fences."
    )
}
