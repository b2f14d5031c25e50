pub mod catalog;
pub mod recommendations;

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::error::ApiError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .merge(recommendations::routes())
        .merge(catalog::routes())
        .fallback(not_found)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "technologies": state.catalog.all().len(),
        "stacks": state.catalog.archetypes().len(),
        "llm": state.llm.as_ref().map(|llm| llm.provider_name()),
    }))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use http_body_util::BodyExt;
    use stackswipe_core::config::{LlmConfig, StackSwipeConfig};

    use crate::AppState;

    /// State with the LLM disabled.
    pub fn offline_state() -> Arc<AppState> {
        Arc::new(AppState::new(StackSwipeConfig::default_config()))
    }

    /// A loopback URL whose port was just released, so connections are refused.
    pub fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    /// State whose LLM points at a port nothing listens on.
    pub fn unreachable_llm_state() -> Arc<AppState> {
        let mut config = StackSwipeConfig::default_config();
        config.llm = LlmConfig {
            enabled: true,
            provider: "ollama".into(),
            base_url: Some(closed_port_url()),
            ..Default::default()
        };
        Arc::new(AppState::new(config))
    }

    pub fn test_router(state: Arc<AppState>) -> axum::Router {
        crate::routes::router().with_state(state)
    }

    pub async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}
