//! AI advice: the client-side adapter that calls the recommendations
//! service, and the server-side half that prompts the LLM.
//!
//! The adapter makes one attempt and never fails. Transport errors, error
//! statuses and bodies that no parse strategy understands all resolve to a
//! canned [`fallback_payload`] chosen from the liked ids.

pub mod fallback;
pub mod parse;
pub mod prompt;

pub use fallback::fallback_payload;
pub use parse::{parse_or_raw, parse_payload};
pub use prompt::build_prompt;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::config::AdvisorConfig;
use crate::error::{Result, StackSwipeError};
use crate::llm::LlmService;
use crate::model::{AdvisorErrorBody, AdvisorRequest, AiRecommendationPayload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the advice text comes from. Returns the raw response body.
pub trait AdviceSource {
    fn fetch_raw(&self, liked: &[String]) -> impl Future<Output = Result<String>> + Send;
}

/// Calls `POST /api/recommendations` on a running service.
#[derive(Debug, Clone)]
pub struct HttpAdviceSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdviceSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AdviceSource for HttpAdviceSource {
    async fn fetch_raw(&self, liked: &[String]) -> Result<String> {
        let body = AdvisorRequest {
            tech_stack: liked.to_vec(),
        };

        tracing::info!(endpoint = %self.endpoint, count = liked.len(), "requesting AI advice");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| StackSwipeError::Llm(format!("advisor request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| StackSwipeError::Llm(format!("advisor response read failed: {e}")))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<AdvisorErrorBody>(&text) {
                Ok(AdvisorErrorBody {
                    error,
                    details: Some(details),
                    ..
                }) => format!("{error}: {details}"),
                Ok(body) => body.error,
                Err(_) => text,
            };
            return Err(StackSwipeError::Llm(format!("advisor returned {status}: {message}")));
        }

        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceOrigin {
    Service,
    Fallback,
}

/// Advice plus where it came from. `error` holds the diagnostic when the
/// fallback was used because the service call failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub payload: AiRecommendationPayload,
    pub source: AdviceOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Advice {
    fn fallback<S: AsRef<str>>(liked: &[S], error: Option<String>) -> Self {
        Self {
            payload: fallback_payload(liked),
            source: AdviceOrigin::Fallback,
            error,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == AdviceOrigin::Fallback
    }
}

/// Client-side adapter over an [`AdviceSource`].
#[derive(Debug, Clone)]
pub struct Advisor<S> {
    source: S,
}

impl<S: AdviceSource> Advisor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch advice for `liked`. Single attempt, never fails.
    pub async fn fetch<L: AsRef<str>>(&self, liked: &[L]) -> Advice {
        if liked.is_empty() {
            // The service rejects an empty stack; skip the round trip.
            return Advice::fallback(liked, None);
        }

        let ids: Vec<String> = liked.iter().map(|s| s.as_ref().to_string()).collect();
        match self.source.fetch_raw(&ids).await {
            Ok(text) => match parse_payload(&text) {
                Some(payload) => Advice {
                    payload,
                    source: AdviceOrigin::Service,
                    error: None,
                },
                None => {
                    tracing::warn!("advisor response could not be parsed, using fallback");
                    Advice::fallback(liked, Some("unparseable advisor response".to_string()))
                }
            },
            Err(e) => {
                tracing::warn!(transient = e.is_transient(), "advisor unavailable, using fallback: {e}");
                Advice::fallback(liked, Some(e.to_string()))
            }
        }
    }
}

/// Server side: prompt the LLM for `liked` and parse what comes back,
/// keeping the raw text when nothing parses.
pub async fn recommend_with_llm(
    llm: &LlmService,
    liked: &[String],
) -> Result<AiRecommendationPayload> {
    if liked.is_empty() {
        return Err(StackSwipeError::InvalidInput(
            "Valid techStack array is required".to_string(),
        ));
    }

    let prompt = build_prompt(liked);
    let text = llm.generate(&prompt, None).await?;
    Ok(parse_or_raw(&text))
}
