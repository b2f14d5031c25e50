use serde_json::{json, Value};

use crate::config::{resolve_api_key, LlmConfig};
use crate::error::{Result, StackSwipeError};

/// LLM text generation behind the recommendations endpoint. One POST per
/// call, no retries.
pub struct LlmService {
    provider: LlmProvider,
    config: LlmConfig,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for LlmService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmService")
            .field("provider", &self.provider)
            .field("model", &self.config.model)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LlmProvider {
    OpenAI,
    Anthropic,
    Gemini,
    Ollama,
}

impl LlmProvider {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "openai" => Ok(Self::OpenAI),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            other => Err(StackSwipeError::Config(format!(
                "unknown LLM provider: '{other}' (expected 'openai', 'anthropic', 'gemini', or 'ollama')"
            ))),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Gemini => "Gemini",
            Self::Ollama => "Ollama",
        }
    }

    /// Env var holding the key, `None` for providers that need no key.
    fn key_env_var(self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
            Self::Gemini => Some("GEMINI_API_KEY"),
            Self::Ollama => None,
        }
    }

    fn default_base_url(self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com",
            Self::Anthropic => "https://api.anthropic.com",
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::Ollama => "http://localhost:11434",
        }
    }

    /// JSON pointer to the generated text in a successful response.
    fn text_pointer(self) -> &'static str {
        match self {
            Self::OpenAI => "/choices/0/message/content",
            Self::Anthropic => "/content/0/text",
            Self::Gemini => "/candidates/0/content/parts/0/text",
            Self::Ollama => "/response",
        }
    }
}

/// A provider request before it is sent.
#[derive(Debug)]
struct RequestParts {
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Value,
}

impl LlmService {
    /// Create an LLM service from configuration. Fails on an unknown provider
    /// or a keyed provider with no resolvable key.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let provider = LlmProvider::parse(&config.provider)?;

        let api_key = match provider.key_env_var() {
            Some(default_env_var) => Some(resolve_api_key(
                config.api_key.as_deref(),
                config.env_var.as_deref(),
                default_env_var,
                &config.provider,
            )?),
            None => None,
        };

        Ok(Self {
            provider,
            config: config.clone(),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.config.provider
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate text from a prompt with an optional system message.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        let label = self.provider.label();
        let parts = self.request_parts(prompt, system);

        tracing::info!(
            provider = label,
            model = %self.config.model,
            "sending LLM request"
        );

        let mut request = self.client.post(&parts.url).json(&parts.body);
        for (name, value) in &parts.headers {
            request = request.header(*name, value);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| StackSwipeError::Llm(format!("{label} request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(StackSwipeError::Llm(format!("{label} error {status}: {text}")));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| StackSwipeError::Llm(format!("{label} response parse error: {e}")))?;

        extract_text(self.provider, &json)
            .map(str::to_string)
            .ok_or_else(|| StackSwipeError::Llm(format!("{label} response missing text content")))
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(self.provider.default_base_url())
            .trim_end_matches('/')
    }

    fn request_parts(&self, prompt: &str, system: Option<&str>) -> RequestParts {
        let base_url = self.base_url();
        let key = self.api_key.clone().unwrap_or_default();
        let model = &self.config.model;
        let max_tokens = self.config.max_tokens;
        let temperature = self.config.temperature;

        match self.provider {
            LlmProvider::OpenAI => {
                let mut messages = Vec::new();
                if let Some(sys) = system {
                    messages.push(json!({"role": "system", "content": sys}));
                }
                messages.push(json!({"role": "user", "content": prompt}));
                RequestParts {
                    url: format!("{base_url}/v1/chat/completions"),
                    headers: vec![("Authorization", format!("Bearer {key}"))],
                    body: json!({
                        "model": model,
                        "messages": messages,
                        "max_tokens": max_tokens,
                        "temperature": temperature,
                    }),
                }
            }
            LlmProvider::Anthropic => {
                let mut body = json!({
                    "model": model,
                    "max_tokens": max_tokens,
                    "temperature": temperature,
                    "messages": [{"role": "user", "content": prompt}],
                });
                if let Some(sys) = system {
                    body["system"] = Value::String(sys.to_string());
                }
                RequestParts {
                    url: format!("{base_url}/v1/messages"),
                    headers: vec![
                        ("x-api-key", key),
                        ("anthropic-version", "2023-06-01".to_string()),
                    ],
                    body,
                }
            }
            LlmProvider::Gemini => {
                let mut body = json!({
                    "contents": [{"parts": [{"text": prompt}]}],
                    "generationConfig": {
                        "maxOutputTokens": max_tokens,
                        "temperature": temperature,
                    }
                });
                if let Some(sys) = system {
                    body["systemInstruction"] = json!({"parts": [{"text": sys}]});
                }
                RequestParts {
                    url: format!("{base_url}/v1beta/models/{model}:generateContent"),
                    headers: vec![("x-goog-api-key", key)],
                    body,
                }
            }
            LlmProvider::Ollama => {
                let mut body = json!({
                    "model": model,
                    "prompt": prompt,
                    "stream": false,
                    "options": {
                        "num_predict": max_tokens,
                        "temperature": temperature,
                    }
                });
                if let Some(sys) = system {
                    body["system"] = Value::String(sys.to_string());
                }
                RequestParts {
                    url: format!("{base_url}/api/generate"),
                    headers: Vec::new(),
                    body,
                }
            }
        }
    }
}

fn extract_text(provider: LlmProvider, json: &Value) -> Option<&str> {
    json.pointer(provider.text_pointer()).and_then(Value::as_str)
}
