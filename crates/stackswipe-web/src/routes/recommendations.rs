use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use stackswipe_core::advisor;
use stackswipe_core::error::StackSwipeError;
use stackswipe_core::model::AiRecommendationPayload;

use crate::error::ApiError;
use crate::AppState;

const TECH_STACK_REQUIRED: &str = "Valid techStack array is required";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/recommendations", post(recommendations))
}

/// `POST /api/recommendations` with `{techStack: [..]}`.
async fn recommendations(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AiRecommendationPayload>, ApiError> {
    // The key check comes before body validation
    let Some(llm) = state.llm.as_ref() else {
        return Err(not_configured(&state));
    };

    let tech_stack = body
        .ok()
        .and_then(|Json(value)| tech_stack(&value))
        .ok_or_else(|| ApiError::bad_request(TECH_STACK_REQUIRED))?;

    tracing::info!(count = tech_stack.len(), provider = llm.provider_name(), "generating recommendations");

    advisor::recommend_with_llm(llm, &tech_stack)
        .await
        .map(Json)
        .map_err(generation_failed)
}

/// Non-empty array of strings under `techStack`. Non-string entries are dropped.
fn tech_stack(body: &Value) -> Option<Vec<String>> {
    let ids: Vec<String> = body
        .get("techStack")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    (!ids.is_empty()).then_some(ids)
}

fn not_configured(state: &AppState) -> ApiError {
    let llm = &state.config.llm;
    let details = if llm.enabled {
        format!(
            "No API key found for provider '{}'. Set [llm] api_key or the provider's environment variable",
            llm.provider
        )
    } else {
        "The LLM is disabled. Set [llm] enabled = true in .stackswipe/config.toml".to_string()
    };
    tracing::error!("recommendations requested but {details}");
    ApiError::internal("API key not configured").with_details(details)
}

fn generation_failed(err: StackSwipeError) -> ApiError {
    tracing::error!("recommendation generation failed: {err}");
    let details = err.to_string();
    if err.is_auth() {
        ApiError::internal("API key error")
            .with_details(details)
            .with_suggestion("Check that the API key for the configured LLM provider is valid")
    } else {
        ApiError::internal("Failed to generate recommendations")
            .with_details(details)
            .with_suggestion("Try again later or with different technologies")
    }
}
