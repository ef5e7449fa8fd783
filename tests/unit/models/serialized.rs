use super::*;
use serde_json::json;

#[test]
fn test_leaf_serializes_without_optional_keys() {
    let node = SerializedNode::leaf("number", "5");
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value, json!({"type": "number", "value": "5"}));
}

#[test]
fn test_container_keeps_null_value_and_elements() {
    let node = SerializedNode::container("parentheses", vec![]);
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value, json!({"type": "parentheses", "value": null, "elements": []}));
}

#[test]
fn test_attr_is_emitted_only_when_present() {
    let mut node = SerializedNode::leaf("number", "1");
    node.attr.insert("unit".to_string(), json!("kg"));
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value,
        json!({"type": "number", "value": "1", "attr": {"unit": "kg"}})
    );
}

#[test]
fn test_parse_tolerates_missing_value_and_null_attr() {
    let formula = parse_formula(r#"[{"type":"parentheses","attr":null,"elements":[]}]"#).unwrap();
    assert_eq!(formula.len(), 1);
    assert_eq!(formula[0].value, None);
    assert!(formula[0].attr.is_empty());
    assert!(formula[0].elements.as_ref().is_some_and(|e| e.is_empty()));
}

#[test]
fn test_root_must_be_an_array() {
    assert!(parse_formula(r#"{"type":"number","value":"5"}"#).is_err());
    assert!(parse_formula("not json").is_err());
}
