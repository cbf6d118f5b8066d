use crate::pipeline::traits::{GroundedGenerator, GroundedResponse, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

enum Script {
    Respond(GroundedResponse),
    Fail(String),
}

/// In-memory generator that replays one canned outcome and records every
/// prompt it was asked to complete.
pub struct ScriptedGenerator {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn responding(response: GroundedResponse) -> Self {
        Self {
            script: Script::Respond(response),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            script: Script::Fail(reason.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GroundedGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<GroundedResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.script {
            Script::Respond(response) => Ok(response.clone()),
            Script::Fail(reason) => Err(ProviderError::Unavailable(reason.clone())),
        }
    }
}
