// Integration tests for the value inspector

use objscope::inspect::{
    classify, format_label, inspect, Category, InspectOptions, NodePath, PaletteMode, StyleClass,
};
use objscope::ui::{render_plain, PlainMode, TreeState};
use objscope::value::json::parse_json;
use objscope::value::{Properties, Value};
use pretty_assertions::assert_eq;

fn options_with(paths: &[&str]) -> InspectOptions {
    InspectOptions {
        expand_paths: Some(paths.iter().map(|p| p.to_string()).collect()),
        ..InspectOptions::default()
    }
}

#[test]
fn test_labels_for_each_category() {
    let cases: Vec<(Value, Category, &str)> = vec![
        (Value::Null, Category::Null, "null"),
        (Value::Undefined, Category::Undefined, "undefined"),
        (Value::Array(vec![]), Category::Array, "Array(0)"),
        (
            Value::Array(vec![1.into(), 2.into(), 3.into()]),
            Category::Array,
            "Array(3)",
        ),
        (Value::from("#fff"), Category::Color, "\"#fff\""),
        (Value::from("hello"), Category::String, "\"hello\""),
        (Value::function("foo"), Category::Function, "f foo()"),
        (Value::default(), Category::Object, "Object"),
        (Value::symbol("k"), Category::Symbol, "Symbol(Symbol(k))"),
        (Value::BigInt(10), Category::BigInt, "10"),
        (Value::Bool(false), Category::Boolean, "false"),
        (Value::Number(3.25), Category::Number, "3.25"),
    ];

    for (value, category, label) in cases {
        assert_eq!(classify(&value), category, "{:?}", value);
        assert_eq!(format_label(&value, category), label, "{:?}", value);
    }
}

#[test]
fn test_style_classes_group_categories() {
    assert_eq!(
        StyleClass::from(Category::Array),
        StyleClass::from(Category::Object)
    );
    assert_eq!(
        StyleClass::from(Category::Color),
        StyleClass::from(Category::String)
    );
}

#[test]
fn test_nested_object_paths_from_json() {
    let data = parse_json(r#"{"a": 1, "b": {"c": 2}}"#).expect("Parsing failed");
    let view = inspect(&data, &InspectOptions::default());

    let a = view.find(&NodePath::from("$ROOT.a")).expect("a missing");
    assert_eq!(a.display_label(), "a: 1");
    assert!(!a.is_expandable());

    let b = view.find(&NodePath::from("$ROOT.b")).expect("b missing");
    assert!(b.is_expandable());

    let c = view.find(&NodePath::from("$ROOT.b.c")).expect("c missing");
    assert_eq!(c.display_label(), "c: 2");
}

#[test]
fn test_expand_paths_and_remount_key() {
    let data = parse_json(r#"{"a": 1, "b": {"c": 2}}"#).expect("Parsing failed");
    let view = inspect(&data, &options_with(&["b", "b.c"]));

    let paths: Vec<&str> = view
        .default_expanded
        .paths()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(paths, vec!["$ROOT.b", "$ROOT.b.c"]);

    let other = inspect(&data, &options_with(&["b"]));
    assert_ne!(view.remount_key, other.remount_key);
}

#[test]
fn test_rendering_is_idempotent() {
    let data = parse_json(r#"{"list": [1, {"x": null}], "color": "hsl(10, 50%, 50%)"}"#)
        .expect("Parsing failed");
    let options = options_with(&["list"]);
    assert_eq!(inspect(&data, &options), inspect(&data, &options));
}

#[test]
fn test_tree_state_follows_expand_paths() {
    let data = parse_json(r#"{"a": 1, "b": {"c": {"d": true}}}"#).expect("Parsing failed");

    let view = inspect(&data, &options_with(&["b"]));
    let mut state = TreeState::new(&view);
    assert!(state.is_expanded(&NodePath::from("$ROOT.b")));

    // Same paths under a new theme keep whatever the user opened
    state.expand(&NodePath::from("$ROOT.b.c"));
    let dark = inspect(
        &data,
        &InspectOptions {
            palette_mode: PaletteMode::Dark,
            ..options_with(&["b"])
        },
    );
    assert!(!state.sync(&dark));
    assert!(state.is_expanded(&NodePath::from("$ROOT.b.c")));

    // Different paths reset to the new defaults
    let collapsed = inspect(&data, &InspectOptions::default());
    assert!(state.sync(&collapsed));
    assert!(!state.is_expanded(&NodePath::from("$ROOT.b")));
    assert!(!state.is_expanded(&NodePath::from("$ROOT.b.c")));
}

#[test]
fn test_plain_output_of_mixed_document() {
    let data = Value::Object(
        Properties::new()
            .with("name", "widget")
            .with("tint", "#ff0000")
            .with("sizes", vec![Value::from(1), Value::from(2)])
            .with("onClick", Value::function("handleClick"))
            .with("missing", Value::Undefined),
    );
    let view = inspect(&data, &InspectOptions::default());

    let expected = "\
  name: \"widget\"
  tint: [■] \"#ff0000\"
▾ sizes: Array(2)
    0: 1
    1: 2
  onClick: f handleClick()
  missing: undefined
";
    assert_eq!(render_plain(&view, PlainMode::All), expected);
}

#[test]
fn test_max_depth_limits_nodes() {
    let data = parse_json(r#"{"a": {"b": {"c": {"d": 1}}}}"#).expect("Parsing failed");
    let options = InspectOptions {
        max_depth: Some(1),
        ..InspectOptions::default()
    };
    let view = inspect(&data, &options);
    assert_eq!(view.node_count(), 2);
    assert!(view.find(&NodePath::from("$ROOT.a.b.c")).is_none());
}
