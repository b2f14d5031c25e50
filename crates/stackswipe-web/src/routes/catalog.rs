use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use stackswipe_core::model::{Category, StackArchetype, Technology};
use stackswipe_core::summary::{summarize, StackResult};

use crate::error::ApiError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/catalog", get(catalog))
        .route("/api/stacks", get(stacks))
        .route("/api/result", post(result))
}

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    #[serde(default)]
    pub liked_ids: Vec<String>,
}

async fn catalog(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<Vec<Technology>>, ApiError> {
    let techs: Vec<&Technology> = match params.category.as_deref() {
        Some(name) => state.catalog.by_category(name.parse::<Category>()?),
        None => state.catalog.all().iter().collect(),
    };
    Ok(Json(techs.into_iter().cloned().collect()))
}

async fn stacks(State(state): State<Arc<AppState>>) -> Json<Vec<StackArchetype>> {
    Json(state.catalog.archetypes().to_vec())
}

async fn result(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResultRequest>,
) -> Result<Json<StackResult>, ApiError> {
    let result = summarize(state.catalog, &req.liked_ids)?;
    tracing::debug!(liked = req.liked_ids.len(), best = %result.best_stack, "computed stack result");
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_result(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/result")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_catalog_all() {
        let app = test_router(offline_state());
        let resp = app.oneshot(get("/api/catalog")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json.as_array().unwrap().len(), 45);
        assert_eq!(json[0]["id"], "react");
    }

    #[tokio::test]
    async fn test_catalog_by_category() {
        let app = test_router(offline_state());
        let resp = app.oneshot(get("/api/catalog?category=mobile")).await.unwrap();
        let json = body_json(resp.into_body()).await;
        let techs = json.as_array().unwrap();
        assert!(!techs.is_empty());
        assert!(techs.iter().all(|t| t["category"] == "mobile"));
    }

    #[tokio::test]
    async fn test_catalog_bad_category_is_400() {
        let app = test_router(offline_state());
        let resp = app.oneshot(get("/api/catalog?category=gaming")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp.into_body()).await;
        assert!(json["error"].as_str().unwrap().contains("gaming"));
    }

    #[tokio::test]
    async fn test_stacks() {
        let app = test_router(offline_state());
        let resp = app.oneshot(get("/api/stacks")).await.unwrap();
        let json = body_json(resp.into_body()).await;
        assert_eq!(json[0]["key"], "MERN");
        assert_eq!(json[0]["techs"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_result_for_mern_likes() {
        let app = test_router(offline_state());
        let body = serde_json::json!({"likedIds": ["react", "express", "mongodb", "nodejs"]});
        let resp = app.oneshot(post_result(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["bestStack"], "MERN");
        assert_eq!(json["stack"]["name"], "MERN Stack");
        assert!(json["recommendations"].as_array().unwrap().len() <= 3);
        assert!(json["shareText"].as_str().unwrap().contains("MERN Stack"));
    }

    #[tokio::test]
    async fn test_result_empty_body_defaults() {
        let app = test_router(offline_state());
        let resp = app.oneshot(post_result(serde_json::json!({}))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["bestStack"], "MERN");
        assert!(json.get("unknownIds").is_none());
    }
}
