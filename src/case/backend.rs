//! Upstream vendors the gateway can route to.

/// Header the gateway reads to pick an upstream vendor.
pub const MODEL_SELECTOR_HEADER: &str = "X-LLM-Model";

/// Backends reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// OpenAI chat completions
    OpenAI,
    /// Anthropic messages
    Anthropic,
    /// xAI Grok via the responses API
    Grok,
}

impl Backend {
    /// Value sent in the model-selector header.
    pub fn id(&self) -> &'static str {
        match self {
            Backend::OpenAI => "openai",
            Backend::Anthropic => "anthropic",
            Backend::Grok => "grok",
        }
    }

    /// Model each backend's smoke case asks for.
    pub fn smoke_model(&self) -> &'static str {
        match self {
            Backend::OpenAI => "gpt-4.1-mini-2025-04-14",
            Backend::Anthropic => "claude-sonnet-4-5-20250929",
            Backend::Grok => "grok-4-1-fast-reasoning",
        }
    }
}
