//! Tests for suggestion loading

use super::*;
use crate::test_utils::test_helpers::{
    counting_source, failing_source, name_path, named_records, static_source,
};
use insta::assert_debug_snapshot;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_exact_match_is_ordered_first() {
    let records = named_records(&["C++", "C#", "C"]);
    let suggestions = build_suggestions(&records, "C", &name_path());

    assert_debug_snapshot!(suggestions, @r#"
    [
        Suggestion {
            value: "C",
            label: "C",
        },
        Suggestion {
            value: "C++",
            label: "C++",
        },
        Suggestion {
            value: "C#",
            label: "C#",
        },
    ]
    "#);
}

#[test]
fn test_order_preserved_without_exact_match() {
    let records = named_records(&["Java", "JavaScript", "Javalin"]);
    let values: Vec<String> = build_suggestions(&records, "Jav", &name_path())
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(values, vec!["Java", "JavaScript", "Javalin"]);
}

#[test]
fn test_exact_match_is_case_sensitive() {
    let records = named_records(&["java", "Java"]);
    let values: Vec<String> = build_suggestions(&records, "Java", &name_path())
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(values, vec!["Java", "java"]);
}

#[test]
fn test_records_truncated_to_max() {
    let names: Vec<String> = (0..150).map(|i| format!("item-{}", i)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let records = named_records(&name_refs);

    let suggestions = build_suggestions(&records, "item", &name_path());

    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(suggestions.last().unwrap().value, "item-99");
}

#[test]
fn test_exact_match_beyond_truncation_is_not_promoted() {
    let mut names: Vec<String> = (0..MAX_SUGGESTIONS).map(|i| format!("go-{}", i)).collect();
    names.push("go".to_string());
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let suggestions = build_suggestions(&named_records(&name_refs), "go", &name_path());

    assert_eq!(suggestions[0].value, "go-0");
    assert!(suggestions.iter().all(|s| s.value != "go"));
}

#[test]
fn test_malformed_record_yields_empty_suggestion() {
    let records = vec![json!({"name": "Rust"}), json!({"title": "no name"})];
    let suggestions = build_suggestions(&records, "Rus", &name_path());

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[1], Suggestion::new(""));
}

#[tokio::test]
async fn test_load_passes_text_to_source() {
    let (source, calls) = counting_source(named_records(&["Python"]));

    let suggestions = load_suggestions(source.as_ref(), "Pyt", &name_path()).await;

    assert_eq!(suggestions, vec![Suggestion::new("Python")]);
    assert_eq!(*calls.lock().unwrap(), vec!["Pyt".to_string()]);
}

#[tokio::test]
async fn test_load_promotes_exact_match() {
    let source = static_source(named_records(&["C", "C++", "C#"]));
    let suggestions = load_suggestions(source.as_ref(), "C#", &name_path()).await;

    let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["C#", "C", "C++"]);
}

#[tokio::test]
async fn test_failing_source_yields_empty_list() {
    let source = failing_source();
    let suggestions = load_suggestions(source.as_ref(), "Rust", &name_path()).await;
    assert!(suggestions.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_exact_matches_lead_and_order_is_stable(
        names in prop::collection::vec(prop::sample::select(vec!["a", "ab", "abc", "b"]), 0..30),
        text in prop::sample::select(vec!["a", "ab", "abc", "b", "z"]),
    ) {
        let records = named_records(&names);
        let values: Vec<String> = build_suggestions(&records, text, &name_path())
            .into_iter()
            .map(|s| s.value)
            .collect();

        let exact_count = names.iter().filter(|n| **n == text).count();
        let expected_rest: Vec<&str> = names.iter().copied().filter(|n| *n != text).collect();

        prop_assert_eq!(values.len(), names.len());
        prop_assert!(values[..exact_count].iter().all(|v| v == text));
        prop_assert_eq!(&values[exact_count..], expected_rest.as_slice());
    }
}
