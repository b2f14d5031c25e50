mod error;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use stackswipe_core::catalog::Catalog;
use stackswipe_core::config::StackSwipeConfig;
use stackswipe_core::llm::LlmService;
use tracing_subscriber::EnvFilter;

pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: StackSwipeConfig,
    /// `None` when the LLM is disabled or has no usable key.
    pub llm: Option<LlmService>,
}

impl AppState {
    pub fn new(config: StackSwipeConfig) -> Self {
        let llm = if config.llm.enabled {
            match LlmService::from_config(&config.llm) {
                Ok(service) => Some(service),
                Err(e) => {
                    tracing::warn!("LLM unavailable, /api/recommendations will fail: {e}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            catalog: Catalog::builtin(),
            config,
            llm,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stackswipe_web=info")),
        )
        .init();

    let project_dir = std::env::current_dir().ok();
    let config = StackSwipeConfig::load(project_dir.as_deref())
        .unwrap_or_else(|_| StackSwipeConfig::default_config());

    let addr = format!("{}:{}", config.web.host, config.web.port);
    let state = Arc::new(AppState::new(config));

    let app = routes::router()
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    tracing::info!("stackswipe-web listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
