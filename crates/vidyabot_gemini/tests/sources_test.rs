//! Tests for grounding-metadata source extraction.

use vidyabot_gemini::{GenerationResponse, extract_sources};

fn response(json: &str) -> GenerationResponse {
    serde_json::from_str(json).expect("response should decode")
}

#[test]
fn test_duplicate_uris_keep_first_title() {
    let completion = response(
        r#"{
            "candidates": [{
                "content": {"parts": [{"text": "reply"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "a.com", "title": "A"}},
                        {"web": {"uri": "a.com", "title": "A2"}},
                        {"web": {"uri": "b.com", "title": "B"}}
                    ]
                }
            }]
        }"#,
    );

    let sources = extract_sources(&completion);
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].uri, "a.com");
    assert_eq!(sources[0].title, "A");
    assert_eq!(sources[1].uri, "b.com");
    assert_eq!(sources[1].title, "B");
}

#[test]
fn test_extraction_is_idempotent() {
    let completion = response(
        r#"{
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "a.com", "title": "A"}},
                        {"web": {"uri": "b.com", "title": "B"}},
                        {"web": {"uri": "a.com", "title": "A again"}}
                    ]
                }
            }]
        }"#,
    );

    let first = extract_sources(&completion);
    let second = extract_sources(&completion);
    assert_eq!(first, second);
}

#[test]
fn test_missing_levels_yield_no_sources() {
    for json in [
        r#"{}"#,
        r#"{"candidates": []}"#,
        r#"{"candidates": [{}]}"#,
        r#"{"candidates": [{"groundingMetadata": {}}]}"#,
        r#"{"candidates": [{"groundingMetadata": {"groundingChunks": []}}]}"#,
    ] {
        let completion = response(json);
        assert!(extract_sources(&completion).is_empty(), "input: {json}");
    }
}

#[test]
fn test_chunks_without_web_or_fields_are_dropped() {
    let completion = response(
        r#"{
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [
                        {},
                        {"web": {}},
                        {"web": {"uri": "a.com", "title": "A"}}
                    ]
                }
            }]
        }"#,
    );

    let sources = extract_sources(&completion);
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].uri, "a.com");
}

#[test]
fn test_title_only_chunk_is_kept() {
    let completion = response(
        r#"{
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [{"web": {"title": "Untitled page"}}]
                }
            }]
        }"#,
    );

    let sources = extract_sources(&completion);
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].uri, "");
    assert_eq!(sources[0].title, "Untitled page");
}

#[test]
fn test_only_first_candidate_is_consulted() {
    let completion = response(
        r#"{
            "candidates": [
                {"groundingMetadata": {"groundingChunks": []}},
                {"groundingMetadata": {
                    "groundingChunks": [{"web": {"uri": "ignored.com", "title": "X"}}]
                }}
            ]
        }"#,
    );

    assert!(extract_sources(&completion).is_empty());
}
