//! Command-Line Interface

use crate::models::{FactCheckResult, Verdict};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

/// Shown for any provider failure; the detail goes to the log.
pub const FAILURE_NOTICE: &str =
    "Failed to verify content. Please try again later or check your API key.";

/// Veritas - verify text against Google Search with Gemini
#[derive(Parser, Debug)]
#[command(name = "veritas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fact-check a piece of text
    Check {
        /// Text to verify (read from stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the JSON Schema of a fact-check result
    Schema,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Where the text to check comes from.
pub enum InputSource {
    Argument(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Argument(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read the text, refusing blank input so no request is made for it.
    pub fn read(self) -> crate::Result<String> {
        let text = match self {
            InputSource::Argument(text) => text,
            InputSource::File(path) => std::fs::read_to_string(path)?,
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        if text.trim().is_empty() {
            return Err(crate::Error::EmptyInput);
        }
        Ok(text)
    }
}

/// JSON envelope printed by `check --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport<'a> {
    pub checked_at: DateTime<Utc>,
    pub model: &'a str,
    #[serde(flatten)]
    pub result: &'a FactCheckResult,
}

fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Verified => "✓",
        Verdict::False => "✕",
        Verdict::Misleading => "!",
        Verdict::Mixed => "⚖",
        Verdict::Unverifiable => "?",
    }
}

/// Plain terminal report: verdict banner, analysis, numbered sources.
pub fn render_report(result: &FactCheckResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] Verdict: {}", verdict_marker(result.verdict), result.verdict);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.markdown_text.trim_end());
    let _ = writeln!(out);
    let _ = writeln!(out, "Sources:");
    if result.sources.is_empty() {
        let _ = writeln!(out, "  No direct web sources were linked by the grounding engine.");
    }
    for (i, source) in result.sources.iter().enumerate() {
        match source.hostname() {
            Some(host) => {
                let _ = writeln!(out, "  {}. {} ({})", i + 1, source.title, host);
            }
            None => {
                let _ = writeln!(out, "  {}. {}", i + 1, source.title);
            }
        }
        let _ = writeln!(out, "     {}", source.uri);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Disclaimer: AI can make mistakes. Please verify independently.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroundingSource;
    use tempfile::TempDir;

    #[test]
    fn test_parse_check_with_text() {
        let cli = Cli::try_parse_from(["veritas", "check", "the moon is cheese", "--json"]).unwrap();
        match cli.command {
            Commands::Check { text, file, json } => {
                assert_eq!(text.as_deref(), Some("the moon is cheese"));
                assert!(file.is_none());
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["veritas", "check", "x", "--file", "claim.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["veritas", "-v", "config", "init", "--force"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let err = InputSource::Argument("   \n\t".to_string()).read().unwrap_err();
        assert!(err.is_empty_input());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("claim.txt");
        std::fs::write(&path, "Water boils at 100C at sea level.\n").unwrap();
        let text = InputSource::from_args(None, Some(path)).read().unwrap();
        assert_eq!(text, "Water boils at 100C at sea level.\n");
    }

    #[test]
    fn test_render_report_lists_sources() {
        let result = FactCheckResult {
            markdown_text: "Verdict: False\n\n**No.**".to_string(),
            sources: vec![
                GroundingSource::new("NASA", "https://www.nasa.gov/a"),
                GroundingSource::new("Web Source", "#"),
            ],
            verdict: Verdict::False,
        };
        let report = render_report(&result);
        assert!(report.starts_with("[✕] Verdict: False"));
        assert!(report.contains("1. NASA (www.nasa.gov)"));
        assert!(report.contains("2. Web Source\n     #"));
    }

    #[test]
    fn test_render_report_without_sources() {
        let result = FactCheckResult::from_generated(None, Vec::new());
        let report = render_report(&result);
        assert!(report.contains("[?] Verdict: Unverifiable"));
        assert!(report.contains("No direct web sources"));
    }

    #[test]
    fn test_check_report_flattens_result() {
        let result = FactCheckResult::from_generated(Some("Verdict: Mixed".to_string()), Vec::new());
        let report = CheckReport {
            checked_at: Utc::now(),
            model: "gemini-2.5-flash",
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "Mixed");
        assert_eq!(json["model"], "gemini-2.5-flash");
        assert!(json["checkedAt"].is_string());
        assert!(json["markdownText"].is_string());
    }
}
