use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-shot notice carried across a redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        FlashMessage { level, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }
}
