use crate::config::ProviderConfig;
use crate::models::ApiKey;
use crate::pipeline::traits::{
    GroundedGenerator, GroundedResponse, GroundingChunk, ProviderError, WebReference,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ERROR_BODY_LIMIT: usize = 500;

/// Gemini `generateContent` client with the Google Search tool switched on.
pub struct GeminiClient {
    client: Client,
    api_key: ApiKey,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, config: &ProviderConfig) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.api_base.as_str().trim_end_matches('/'),
            config.model
        );
        Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            endpoint,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

fn build_request(prompt: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    grounding_chunks: Option<Vec<WireChunk>>,
    web_search_queries: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct WireChunk {
    web: Option<WireWeb>,
}

#[derive(Deserialize)]
struct WireWeb {
    title: Option<String>,
    uri: Option<String>,
}

impl GenerateContentResponse {
    /// Only the first candidate is read. Its text is the concatenation of
    /// the non-thought text parts; no text parts means no text.
    fn into_grounded(self) -> GroundedResponse {
        let Some(candidate) = self.candidates.and_then(|c| c.into_iter().next()) else {
            return GroundedResponse::default();
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            debug!(finish_reason = reason, "first candidate finished");
        }

        let texts: Vec<String> = candidate
            .content
            .and_then(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text)
            .collect();
        let text = if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        };

        let metadata = candidate.grounding_metadata;
        if let Some(queries) = metadata.as_ref().and_then(|m| m.web_search_queries.as_ref()) {
            debug!(queries = queries.len(), "provider ran web searches");
        }
        let grounding_chunks = metadata
            .and_then(|m| m.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .map(|chunk| GroundingChunk {
                web: chunk.web.map(|w| WebReference {
                    title: w.title,
                    uri: w.uri,
                }),
            })
            .collect();

        GroundedResponse {
            text,
            grounding_chunks,
        }
    }
}

pub(crate) fn decode_response(body: &str) -> Result<GroundedResponse, ProviderError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    Ok(parsed.into_grounded())
}

#[async_trait]
impl GroundedGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GroundedResponse, ProviderError> {
        debug!(model = %self.model, "sending grounded generation request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(model = %self.model, status = status.as_u16(), "provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        decode_response(&body)
    }
}
