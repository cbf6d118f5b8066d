pub mod fact_check;
pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod sources;
pub mod traits;

pub use fact_check::FactChecker;
pub use gemini::GeminiClient;
pub use mock::ScriptedGenerator;
pub use prompt::build_prompt;
pub use sources::extract_sources;
pub use traits::{GroundedGenerator, GroundedResponse, GroundingChunk, ProviderError, WebReference};
