use crate::models::FactCheckResult;
use crate::pipeline::prompt::build_prompt;
use crate::pipeline::sources::extract_sources;
use crate::pipeline::traits::GroundedGenerator;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// Runs one search-grounded fact check per call against the injected
/// generator. Holds no state between calls and never retries.
pub struct FactChecker<G>
where
    G: GroundedGenerator,
{
    generator: G,
}

impl<G> FactChecker<G>
where
    G: GroundedGenerator,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn check(&self, text: &str) -> crate::Result<FactCheckResult> {
        let digest = input_digest(text);
        info!(input = %digest, chars = text.chars().count(), "fact check: start");

        let prompt = build_prompt(text);
        let response = match self.generator.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!(input = %digest, error = %e, "fact check: provider failed");
                return Err(e.into());
            }
        };

        let sources = extract_sources(&response.grounding_chunks);
        let result = FactCheckResult::from_generated(response.text, sources);
        info!(
            input = %digest,
            verdict = %result.verdict,
            sources = result.sources.len(),
            "fact check: end"
        );
        Ok(result)
    }
}

// Short digest so log lines can be correlated without carrying the text.
fn input_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(&hasher.finalize()[..6])
}
