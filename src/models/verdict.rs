use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-vocabulary label attached to every fact-check result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Verdict {
    Verified,
    False,
    Misleading,
    Mixed,
    #[default]
    Unverifiable,
}

// Checked in order; the first set with a hit wins.
const TRIGGERS: &[(Verdict, &[&str])] = &[
    (
        Verdict::Verified,
        &["verdict: true", "verdict: likely true", "verdict: accurate"],
    ),
    (
        Verdict::False,
        &["verdict: false", "verdict: incorrect", "verdict: debunked"],
    ),
    (Verdict::Misleading, &["verdict: misleading"]),
    (Verdict::Mixed, &["verdict: mixed", "verdict: complicated"]),
];

impl Verdict {
    /// Guess the verdict from the model's free text.
    ///
    /// This is a plain substring match on the lower-cased text and only knows
    /// the phrases in `TRIGGERS`. Anything else, including "Verdict: Needs
    /// Context", falls through to `Unverifiable`.
    pub fn classify(generated_text: &str) -> Verdict {
        let lower = generated_text.to_lowercase();
        TRIGGERS
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
            .map(|(verdict, _)| *verdict)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Verified => "Verified",
            Verdict::False => "False",
            Verdict::Misleading => "Misleading",
            Verdict::Mixed => "Mixed",
            Verdict::Unverifiable => "Unverifiable",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(generated_text: &str) -> Verdict {
    Verdict::classify(generated_text)
}
