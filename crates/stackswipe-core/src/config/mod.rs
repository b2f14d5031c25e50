use crate::error::{Result, StackSwipeError};
use crate::model::Category;
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackSwipeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Custom path for the preference file. Defaults to
    /// `~/.config/stackswipe/preferences.json`.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeConfig {
    #[serde(default = "default_deck_size")]
    pub deck_size: usize,
    /// Category names to draw cards from. Empty means every category.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            deck_size: default_deck_size(),
            categories: Vec::new(),
        }
    }
}

impl SwipeConfig {
    /// Parsed categories, skipping names that don't parse.
    pub fn parsed_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub env_var: Option<String>,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_llm_provider(),
            model: default_llm_model(),
            api_key: None,
            base_url: None,
            env_var: None,
            max_tokens: default_llm_max_tokens(),
            temperature: default_llm_temperature(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Full URL of the recommendations endpoint.
    #[serde(default = "default_advisor_endpoint")]
    pub endpoint: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_advisor_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_port")]
    pub port: u16,
    #[serde(default = "default_web_host")]
    pub host: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            host: default_web_host(),
        }
    }
}

/// Valid LLM provider names. `claude` is an alias for `anthropic`.
pub const VALID_LLM_PROVIDERS: &[&str] = &["openai", "anthropic", "claude", "gemini", "ollama"];

fn default_deck_size() -> usize {
    10
}
fn default_llm_provider() -> String {
    "openai".to_string()
}
fn default_llm_model() -> String {
    "gpt-4.1-nano".to_string()
}
fn default_llm_max_tokens() -> usize {
    1500
}
fn default_llm_temperature() -> f32 {
    0.7
}
fn default_advisor_endpoint() -> String {
    format!(
        "http://{}:{}/api/recommendations",
        default_web_host(),
        default_web_port()
    )
}
fn default_web_port() -> u16 {
    37740
}
fn default_web_host() -> String {
    "127.0.0.1".to_string()
}

impl StackSwipeConfig {
    /// Load configuration with three-layer TOML merge:
    /// 1. ~/.config/stackswipe/config.toml (global)
    /// 2. .stackswipe/config.toml (project)
    /// 3. .stackswipe/config.local.toml (local, gitignored)
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = project_dir {
            let project_config = dir.join(".stackswipe").join("config.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }

            let local_config = dir.join(".stackswipe").join("config.local.toml");
            if local_config.exists() {
                builder = builder.add_source(File::from(local_config).required(false));
            }
        }

        let config = builder
            .build()
            .map_err(|e| StackSwipeError::Config(e.to_string()))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| StackSwipeError::Config(e.to_string()))?;

        cfg.validate();
        Ok(cfg)
    }

    /// Defaults only, no files.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StackSwipeError::Config(e.to_string()))
    }

    /// Validate config values, clamping out-of-range values and logging
    /// warnings. Lenient: values are fixed rather than the config rejected.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.swipe.deck_size == 0 {
            warnings.push("swipe.deck_size = 0, setting to 1".to_string());
            self.swipe.deck_size = 1;
        }

        for name in &self.swipe.categories {
            if name.parse::<Category>().is_err() {
                warnings.push(format!("unknown swipe category '{name}', ignoring"));
            }
        }

        // Only validate the provider if the LLM is enabled
        if self.llm.enabled && !VALID_LLM_PROVIDERS.contains(&self.llm.provider.as_str()) {
            warnings.push(format!(
                "unknown LLM provider '{}', valid: {}",
                self.llm.provider,
                VALID_LLM_PROVIDERS.join(", ")
            ));
        }

        if self.llm.max_tokens == 0 {
            warnings.push("llm.max_tokens = 0, setting to 256".to_string());
            self.llm.max_tokens = 256;
        }

        let temperature = self.llm.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            warnings.push(format!(
                "llm.temperature = {temperature} out of range [0.0, 2.0], clamping"
            ));
            // NaN fails the range check too and clamps to NaN; reset it
            self.llm.temperature = if temperature.is_nan() {
                default_llm_temperature()
            } else {
                temperature.clamp(0.0, 2.0)
            };
        }

        if self.advisor.endpoint.trim().is_empty() {
            warnings.push("advisor.endpoint is empty, using default".to_string());
            self.advisor.endpoint = default_advisor_endpoint();
        }

        for w in &warnings {
            tracing::warn!("config: {}", w);
        }

        warnings
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stackswipe").join("config.toml"))
}

/// Resolve an API key: the config field first, then the override env var,
/// then the provider's default env var.
pub fn resolve_api_key(
    api_key: Option<&str>,
    env_var_override: Option<&str>,
    default_env_var: &str,
    provider_name: &str,
) -> Result<String> {
    if let Some(key) = api_key {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    let env_var_name = env_var_override.unwrap_or(default_env_var);

    match std::env::var(env_var_name) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(StackSwipeError::Config(format!(
            "{provider_name} provider requires an API key \
             (set llm.api_key or {env_var_name})"
        ))),
    }
}
