//! # Veritas
//!
//! Search-grounded fact checking. A piece of text is wrapped in a fixed
//! fact-checking prompt, sent once to the Gemini `generateContent` API with the
//! Google Search tool enabled, and the answer is reduced to a [`Verdict`], the
//! markdown analysis and the cited web sources.
//!
//! ```no_run
//! use veritas::config::ProviderConfig;
//! use veritas::models::ApiKey;
//! use veritas::pipeline::{FactChecker, GeminiClient};
//!
//! # async fn run() -> veritas::Result<()> {
//! let key = ApiKey::from_env("API_KEY")?;
//! let checker = FactChecker::new(GeminiClient::new(key, &ProviderConfig::default()));
//! let result = checker.check("The Great Wall is visible from the Moon.").await?;
//! println!("{:?}: {} sources", result.verdict, result.sources.len());
//! # Ok(())
//! # }
//! ```
//!
//! Modules:
//!
//! - [`models`]: verdicts, sources, results and the provider credential
//! - [`pipeline`]: prompt, provider boundary, source extraction, orchestration
//! - [`config`]: TOML configuration with environment overrides
//! - [`cli`]: command-line front-end definitions

pub mod cli;
pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{classify, FactCheckResult, GroundingSource, Verdict};
pub use pipeline::{FactChecker, GeminiClient, GroundedGenerator, ProviderError};

/// Result type alias for the fact checker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the fact checker
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing credential or invalid configuration. Raised before any request.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing to verify: input is empty")]
    EmptyInput,
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Error::Provider(_))
    }
}
