use async_trait::async_trait;

/// Any failure talking to the generation provider. Callers treat every
/// variant the same way: the check failed and is not retried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Raised by in-process generators such as `ScriptedGenerator`; the HTTP
    /// client reports through the other variants.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Web page reference inside a grounding chunk. Either field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebReference {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// One citation record from the provider's grounding metadata. Only web
/// references are modelled; other kinds decode with `web: None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroundingChunk {
    pub web: Option<WebReference>,
}

impl GroundingChunk {
    pub fn web(title: Option<&str>, uri: Option<&str>) -> Self {
        Self {
            web: Some(WebReference {
                title: title.map(str::to_string),
                uri: uri.map(str::to_string),
            }),
        }
    }
}

/// Decoded answer of a single search-grounded completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroundedResponse {
    /// Generated text of the first candidate, if it produced any.
    pub text: Option<String>,
    /// Grounding chunks of the first candidate, in provider order.
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[async_trait]
pub trait GroundedGenerator: Send + Sync {
    /// Run one completion of `prompt` with web-search grounding enabled.
    async fn generate(&self, prompt: &str) -> Result<GroundedResponse, ProviderError>;
}
