//! Tests for the UP format rules: key splitting, value dispatch order and
//! the per-context trimming differences between scalars and list elements.

use uplang::parser::{dedent, parse_inline_list, split_key_type, split_key_value};
use uplang::{parse, up, Value};

fn first_value(text: &str) -> Value {
    parse(text).unwrap().into_nodes().remove(0).value
}

#[test]
fn test_key_runs_to_first_whitespace() {
    let doc = parse("key.with-odd:chars value here").unwrap();
    assert_eq!(doc.nodes()[0].key, "key.with-odd:chars");
    assert_eq!(doc.nodes()[0].value, Value::from("value here"));
}

#[test]
fn test_tab_separates_key_and_value() {
    assert_eq!(split_key_value("key\tvalue"), ("key", "value"));
    assert_eq!(first_value("key\t\tvalue"), Value::from("value"));
}

#[test]
fn test_annotation_splits_on_first_bang_only() {
    let doc = parse("when!date!utc 2024-01-01").unwrap();
    let node = &doc.nodes()[0];
    assert_eq!(node.key, "when");
    assert_eq!(node.type_annotation.as_deref(), Some("date!utc"));
    assert_eq!(split_key_type("plain"), ("plain", None));
}

#[test]
fn test_bang_in_value_is_not_an_annotation() {
    let doc = parse("greeting hello!world").unwrap();
    assert_eq!(doc.nodes()[0].type_annotation, None);
    assert_eq!(doc.nodes()[0].value, Value::from("hello!world"));
}

#[test]
fn test_fence_wins_over_other_forms() {
    // Text after the opening fence is ignored
    assert_eq!(
        first_value("x ```rust\nbody\n```"),
        Value::from("body")
    );
}

#[test]
fn test_lone_bracket_opens_list_not_inline_list() {
    assert_eq!(first_value("x [\n]"), Value::List(vec![]));
}

#[test]
fn test_brace_inside_value_is_scalar() {
    assert_eq!(first_value("x {a}"), Value::from("{a}"));
    assert_eq!(first_value("x {}"), Value::from("{}"));
}

#[test]
fn test_list_elements_are_whole_lines() {
    assert_eq!(
        first_value("xs [\n  name value\n  # skipped\n\n  key!t v\n]"),
        up!(["name value", "key!t v"])
    );
}

#[test]
fn test_lone_open_bracket_in_list_is_scalar() {
    assert_eq!(first_value("xs [\n  [\n]"), up!(["["]));
}

#[test]
fn test_list_inline_elements() {
    assert_eq!(
        first_value("matrix [\n  [1, 2]\n  []\n  [ 3 ]\n]"),
        up!([["1", "2"], [], ["3"]])
    );
}

#[test]
fn test_block_without_closing_in_list_swallows_rest() {
    // The list closer becomes a block key because blocks close only on '}'
    let value = first_value("xs [\n  {\n    a 1\n  ]\nb 2");
    assert_eq!(value, up!([{"a": "1", "]": "", "b": "2"}]));
}

#[test]
fn test_closing_bracket_inside_block_is_a_key() {
    let value = first_value("b {\n]\n}");
    assert_eq!(value, up!({"]": ""}));
}

#[test]
fn test_indentation_is_not_significant() {
    let a = parse("s {\nk v\n}").unwrap();
    let b = parse("   s {\n        k v\n  }").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_comment_with_leading_whitespace() {
    let doc = parse("   # indented comment\nk v").unwrap();
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_hash_inside_value_is_kept() {
    assert_eq!(first_value("color #ff0000"), Value::from("#ff0000"));
}

#[test]
fn test_inline_list_empty_elements() {
    assert_eq!(
        parse_inline_list("[a,,b,]"),
        vec![Value::from("a"), Value::from(""), Value::from("b"), Value::from("")]
    );
    assert_eq!(parse_inline_list("[ , ]"), vec![Value::from(""), Value::from("")]);
}

#[test]
fn test_dedent_short_lines_unchanged() {
    assert_eq!(dedent("    four\n  x\nx", 4), "four\n  x\nx");
    assert_eq!(dedent("abcdef", 3), "def");
}

#[test]
fn test_dedent_zero_is_identity() {
    assert_eq!(first_value("t!0 ```\n  a\n```"), Value::from("  a"));
}

#[test]
fn test_dedent_with_leading_zero_annotation() {
    assert_eq!(first_value("t!02 ```\n  a\n```"), Value::from("a"));
}

#[test]
fn test_dedent_huge_amount_leaves_lines() {
    assert_eq!(
        first_value("t!99999999999999999999999 ```\n  a\n```"),
        Value::from("  a")
    );
}

#[test]
fn test_empty_multiline() {
    assert_eq!(first_value("t ```\n```"), Value::from(""));
    assert_eq!(first_value("t ```"), Value::from(""));
}

#[test]
fn test_only_ascii_digits_dedent() {
    // ARABIC-INDIC DIGIT TWO is not a dedent amount
    assert_eq!(first_value("t!\u{0662} ```\n  ab\n```"), Value::from("  ab"));
    assert_eq!(first_value("t!\u{00b2} ```\n  ab\n```"), Value::from("  ab"));
}

#[test]
fn test_separator_control_lines_are_blank() {
    let doc = parse("\u{1c}\u{1d}\n\u{1e}\u{1f}\nk v").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.nodes()[0].key, "k");

    assert!(parse("\u{1f}").unwrap().is_empty());
}

#[test]
fn test_separator_controls_split_and_close() {
    assert_eq!(first_value("k\u{1f}v"), Value::from("v"));
    assert_eq!(first_value("b {\n  x 1\n}\u{1c}\nafter 2"), up!({"x": "1"}));
    assert_eq!(first_value("xs [\n\u{1e}a\u{1e}\n]"), up!(["a"]));
}
