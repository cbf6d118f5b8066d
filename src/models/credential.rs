use std::env;
use std::fmt;

/// Secret used to authenticate against the generation provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts any non-blank key that is not an obvious `sk-...` style placeholder.
    pub fn new(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::Configuration("API key is empty".to_string()));
        }
        if trimmed.contains("...") {
            return Err(crate::Error::Configuration(
                "API key looks like a placeholder".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_env(var: &str) -> crate::Result<Self> {
        match env::var(var) {
            Ok(raw) => Self::new(&raw).map_err(|e| match e {
                crate::Error::Configuration(msg) => {
                    crate::Error::Configuration(format!("{var}: {msg}"))
                }
                other => other,
            }),
            Err(_) => Err(crate::Error::Configuration(format!(
                "{var} environment variable is missing"
            ))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
