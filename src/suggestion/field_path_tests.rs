//! Tests for FieldPath parsing and extraction

use super::*;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_parse_single_key() {
    let path = FieldPath::parse("name").unwrap();
    assert_eq!(path.segments, vec!["name"]);
    assert_eq!(path.as_str(), "name");
}

#[test]
fn test_parse_dotted_path() {
    let path = FieldPath::parse("skill.meta.name").unwrap();
    assert_eq!(path.segments, vec!["skill", "meta", "name"]);
}

#[test]
fn test_parse_bracket_index() {
    let path = FieldPath::parse("tags[0].label").unwrap();
    assert_eq!(path.segments, vec!["tags", "0", "label"]);
}

#[test]
fn test_parse_quoted_key_with_dot() {
    let path = FieldPath::parse(r#"meta["display.name"]"#).unwrap();
    assert_eq!(path.segments, vec!["meta", "display.name"]);

    let single = FieldPath::parse("meta['display.name']").unwrap();
    assert_eq!(single.segments, vec!["meta", "display.name"]);
}

#[test]
fn test_parse_consecutive_brackets() {
    let path = FieldPath::parse("grid[1][2]").unwrap();
    assert_eq!(path.segments, vec!["grid", "1", "2"]);
}

#[test]
fn test_parse_empty_path_is_error() {
    assert!(matches!(
        FieldPath::parse(""),
        Err(TypeaheadError::InvalidTargetPath { .. })
    ));
    assert!(FieldPath::parse("   ").is_err());
}

#[test]
fn test_parse_unterminated_bracket_is_error() {
    let err = FieldPath::parse("tags[0").unwrap_err();
    assert!(err.to_string().contains("unterminated bracket"));
}

#[test]
fn test_parse_unterminated_quote_is_error() {
    let err = FieldPath::parse("meta[\"name").unwrap_err();
    assert!(err.to_string().contains("unterminated quote"));
}

#[test]
fn test_extract_top_level_string() {
    let path = FieldPath::parse("name").unwrap();
    assert_eq!(path.extract(&json!({"name": "Rust"})), "Rust");
}

#[test]
fn test_extract_nested_value() {
    let path = FieldPath::parse("skill.name").unwrap();
    let record = json!({"skill": {"name": "Go", "id": 7}});
    assert_eq!(path.extract(&record), "Go");
}

#[test]
fn test_extract_array_index_both_syntaxes() {
    let record = json!({"tags": [{"label": "first"}, {"label": "second"}]});
    let bracket = FieldPath::parse("tags[1].label").unwrap();
    let dotted = FieldPath::parse("tags.1.label").unwrap();
    assert_eq!(bracket.extract(&record), "second");
    assert_eq!(dotted.extract(&record), "second");
}

#[test]
fn test_extract_missing_field_is_empty() {
    let path = FieldPath::parse("name").unwrap();
    assert_eq!(path.extract(&json!({"title": "x"})), "");
    assert_eq!(path.extract(&json!("just a string")), "");
}

#[test]
fn test_extract_null_is_empty() {
    let path = FieldPath::parse("name").unwrap();
    assert_eq!(path.extract(&json!({"name": null})), "");
}

#[test]
fn test_extract_non_string_values_use_json_text() {
    let path = FieldPath::parse("v").unwrap();
    assert_eq!(path.extract(&json!({"v": 42})), "42");
    assert_eq!(path.extract(&json!({"v": true})), "true");
    assert_eq!(path.extract(&json!({"v": [1, 2]})), "[1,2]");
}

#[test]
fn test_out_of_range_index_is_empty() {
    let path = FieldPath::parse("tags[5]").unwrap();
    assert_eq!(path.extract(&json!({"tags": ["a"]})), "");
}

#[test]
fn test_display_shows_original_path() {
    let path = FieldPath::parse("tags[0].label").unwrap();
    assert_eq!(path.to_string(), "tags[0].label");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dotted_keys_round_trip_through_nested_objects(
        keys in prop::collection::vec("[a-z]{1,8}", 1..5),
        leaf in "[A-Za-z0-9 ]{0,12}",
    ) {
        let path = FieldPath::parse(&keys.join(".")).unwrap();
        let record = keys
            .iter()
            .rev()
            .fold(json!(leaf.clone()), |inner, key| json!({ key.as_str(): inner }));

        prop_assert_eq!(path.extract(&record), leaf);
    }
}
