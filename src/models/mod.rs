pub mod credential;
pub mod result;
pub mod source;
pub mod verdict;

pub use credential::ApiKey;
pub use result::{FactCheckResult, NO_ANALYSIS_PLACEHOLDER};
pub use source::{GroundingSource, DEFAULT_SOURCE_TITLE, DEFAULT_SOURCE_URI};
pub use verdict::{classify, Verdict};
