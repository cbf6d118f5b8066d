use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_TITLE: &str = "Web Source";
pub const DEFAULT_SOURCE_URI: &str = "#";

/// A web page the provider cited while grounding its answer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl GroundingSource {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }

    /// Host part of the uri, if it parses as an absolute URL.
    pub fn hostname(&self) -> Option<String> {
        url::Url::parse(&self.uri)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}
