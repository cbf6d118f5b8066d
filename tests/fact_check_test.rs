//! End-to-end behaviour of the fact checker with the provider substituted.

use veritas::models::{GroundingSource, Verdict, NO_ANALYSIS_PLACEHOLDER};
use veritas::pipeline::{FactChecker, GroundedResponse, GroundingChunk, ScriptedGenerator};

fn response(text: &str, chunks: Vec<GroundingChunk>) -> GroundedResponse {
    GroundedResponse {
        text: Some(text.to_string()),
        grounding_chunks: chunks,
    }
}

#[tokio::test]
async fn test_grounded_answer_becomes_result() {
    let generator = ScriptedGenerator::responding(response(
        "Verdict: Likely True\n\nThe **Eiffel Tower** grows in summer.",
        vec![
            GroundingChunk::web(Some("toureiffel.paris"), Some("https://www.toureiffel.paris/a")),
            GroundingChunk { web: None },
            GroundingChunk::web(None, Some("https://example.org/b")),
        ],
    ));
    let checker = FactChecker::new(generator);

    let result = checker
        .check("The Eiffel Tower gets taller in summer.")
        .await
        .expect("check should succeed");

    assert_eq!(result.verdict, Verdict::Verified);
    assert!(result.markdown_text.starts_with("Verdict: Likely True"));
    assert_eq!(
        result.sources,
        vec![
            GroundingSource::new("toureiffel.paris", "https://www.toureiffel.paris/a"),
            GroundingSource::new("Web Source", "https://example.org/b"),
        ]
    );
    assert_eq!(checker.generator().calls(), 1);
}

#[tokio::test]
async fn test_prompt_carries_input_verbatim() {
    let checker = FactChecker::new(ScriptedGenerator::responding(GroundedResponse::default()));
    let input = "Bananas are \"berries\"\nand strawberries are not.";

    checker.check(input).await.expect("check should succeed");

    let prompts = checker.generator().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(input));
    assert!(prompts[0].contains("Verdict:"));
}

#[tokio::test]
async fn test_provider_failure_is_provider_error_without_retry() {
    let checker = FactChecker::new(ScriptedGenerator::failing("connection reset"));

    let err = checker
        .check("The moon is made of cheese.")
        .await
        .expect_err("check should fail");

    assert!(err.is_provider());
    assert!(err.to_string().contains("connection reset"));
    assert_eq!(checker.generator().calls(), 1);
}

#[tokio::test]
async fn test_empty_response_gives_placeholder() {
    let checker = FactChecker::new(ScriptedGenerator::responding(GroundedResponse {
        text: Some(String::new()),
        grounding_chunks: Vec::new(),
    }));

    let result = checker.check("Anything.").await.expect("check should succeed");

    assert_eq!(result.markdown_text, NO_ANALYSIS_PLACEHOLDER);
    assert!(result.sources.is_empty());
    assert_eq!(result.verdict, Verdict::Unverifiable);
}

#[tokio::test]
async fn test_conflicting_verdict_lines_follow_priority() {
    let checker = FactChecker::new(ScriptedGenerator::responding(response(
        "Verdict: false verdict: misleading",
        Vec::new(),
    )));

    let result = checker.check("claim").await.expect("check should succeed");
    assert_eq!(result.verdict, Verdict::False);
}

#[tokio::test]
async fn test_needs_context_is_unverifiable() {
    let checker = FactChecker::new(ScriptedGenerator::responding(response(
        "Verdict: Needs Context\n\nIt depends on the year.",
        vec![GroundingChunk::web(Some("A"), Some("http://a"))],
    )));

    let result = checker.check("claim").await.expect("check should succeed");
    assert_eq!(result.verdict, Verdict::Unverifiable);
    assert_eq!(result.sources.len(), 1);
}

#[tokio::test]
async fn test_each_call_hits_the_provider() {
    let checker = FactChecker::new(ScriptedGenerator::responding(response("Verdict: Mixed", Vec::new())));

    checker.check("same text").await.expect("first check");
    checker.check("same text").await.expect("second check");

    assert_eq!(checker.generator().calls(), 2);
}
