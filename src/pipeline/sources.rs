use crate::models::{GroundingSource, DEFAULT_SOURCE_TITLE, DEFAULT_SOURCE_URI};
use crate::pipeline::traits::GroundingChunk;

/// Turn grounding chunks into display sources.
///
/// Chunks without a web reference are skipped. Missing or empty titles and
/// uris fall back to `"Web Source"` and `"#"`. Order is preserved and
/// repeated uris are kept.
pub fn extract_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| GroundingSource {
            title: non_empty_or(web.title.as_deref(), DEFAULT_SOURCE_TITLE),
            uri: non_empty_or(web.uri.as_deref(), DEFAULT_SOURCE_URI),
        })
        .collect()
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_no_sources() {
        assert!(extract_sources(&[]).is_empty());
    }

    #[test]
    fn drops_non_web_chunks_and_defaults_missing_fields() {
        let chunks = vec![
            GroundingChunk::web(Some("A"), Some("http://a")),
            GroundingChunk { web: None },
            GroundingChunk::web(None, Some("http://b")),
        ];
        assert_eq!(
            extract_sources(&chunks),
            vec![
                GroundingSource::new("A", "http://a"),
                GroundingSource::new("Web Source", "http://b"),
            ]
        );
    }

    #[test]
    fn missing_uri_becomes_hash() {
        let chunks = vec![GroundingChunk::web(Some("Only a title"), None)];
        assert_eq!(
            extract_sources(&chunks),
            vec![GroundingSource::new("Only a title", "#")]
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let chunks = vec![GroundingChunk::web(Some(""), Some(""))];
        assert_eq!(
            extract_sources(&chunks),
            vec![GroundingSource::new("Web Source", "#")]
        );
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let chunks = vec![
            GroundingChunk::web(Some("x"), Some("http://same")),
            GroundingChunk::web(Some("y"), Some("http://other")),
            GroundingChunk::web(Some("x"), Some("http://same")),
        ];
        let uris: Vec<String> = extract_sources(&chunks).into_iter().map(|s| s.uri).collect();
        assert_eq!(uris, vec!["http://same", "http://other", "http://same"]);
    }
}
