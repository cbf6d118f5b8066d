use crate::models::source::GroundingSource;
use crate::models::verdict::Verdict;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text used when the provider returns no analysis at all.
pub const NO_ANALYSIS_PLACEHOLDER: &str = "No analysis could be generated.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResult {
    /// Markdown analysis, never empty.
    pub markdown_text: String,
    /// Cited pages in provider order, duplicates kept.
    pub sources: Vec<GroundingSource>,
    pub verdict: Verdict,
}

impl FactCheckResult {
    /// Assemble a result from the provider's text and the extracted sources.
    /// The verdict is classified from the same text that ends up in the result.
    pub fn from_generated(text: Option<String>, sources: Vec<GroundingSource>) -> Self {
        let markdown_text = match text {
            Some(t) if !t.is_empty() => t,
            _ => NO_ANALYSIS_PLACEHOLDER.to_string(),
        };
        let verdict = Verdict::classify(&markdown_text);
        Self {
            markdown_text,
            sources,
            verdict,
        }
    }
}
