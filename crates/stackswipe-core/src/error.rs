use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackSwipeError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StackSwipeError {
    /// Returns `true` when the error is likely transient (HTTP 429/5xx,
    /// timeouts, refused connections). Used for diagnostics only: the advisor
    /// makes a single attempt and never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Llm(msg) | Self::Storage(msg) => is_transient_message(msg),
            _ => false,
        }
    }

    /// Returns `true` when the message points at a missing or rejected API key.
    pub fn is_auth(&self) -> bool {
        let msg = self.to_string().to_lowercase();
        msg.contains("api key") || msg.contains("authentication") || msg.contains("auth")
    }
}

fn is_transient_message(msg: &str) -> bool {
    let msg_lower = msg.to_lowercase();
    for code in ["429", "500", "502", "503", "504"] {
        if msg_lower.contains(code) {
            return true;
        }
    }
    let patterns = [
        "timeout",
        "timed out",
        "connection refused",
        "connection reset",
        "broken pipe",
        "temporarily unavailable",
    ];
    patterns.iter().any(|p| msg_lower.contains(p))
}

pub type Result<T> = std::result::Result<T, StackSwipeError>;
