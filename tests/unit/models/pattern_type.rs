use super::*;
use serde_json::json;

fn rule(value: serde_json::Value) -> TokenTypeRule {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_rule_defaults() {
    let rule = rule(json!({"name": "variable", "pattern": "[a-z]+"}));
    assert_eq!(rule.category, Category::Number);
    assert!(!rule.container);
    assert_eq!(rule.priority, 1);
    assert!(rule.attr.is_empty());
}

#[test]
fn test_pattern_matches_whole_value() {
    let ty = PatternTokenType::from_rule(&rule(json!({
        "name": "variable",
        "pattern": "[a-z]+",
        "priority": 3
    })))
    .unwrap();

    assert_eq!(ty.match_value("abc"), Some(3));
    assert_eq!(ty.match_value("abc1"), None);
    assert_eq!(ty.match_value("1abc"), None);
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let result = PatternTokenType::from_rule(&rule(json!({"name": "bad", "pattern": "("})));
    assert!(result.is_err());
}

#[test]
fn test_container_rule_requires_children() {
    let ty = PatternTokenType::from_rule(&rule(json!({
        "name": "abs",
        "pattern": "\\|",
        "container": true,
        "category": "number"
    })))
    .unwrap();

    assert!(ty.is_container());
    let empty = Neighborhood {
        prev: None,
        next: None,
        children: Some(0),
    };
    assert!(!ty.is_valid(&empty));
    let filled = Neighborhood {
        children: Some(1),
        ..empty
    };
    assert!(ty.is_valid(&filled));
}

#[test]
fn test_rule_category_and_attrs() {
    let ty = PatternTokenType::from_rule(&rule(json!({
        "name": "power",
        "pattern": "\\^",
        "category": "operator",
        "attr": {"precedence": 3}
    })))
    .unwrap();

    assert_eq!(ty.category(), Category::Operator);
    assert_eq!(ty.default_attrs().get("precedence"), Some(&json!(3)));
}

#[test]
fn test_container_rule_is_entered_after_add() {
    let container = PatternTokenType::from_rule(&rule(json!({
        "name": "abs",
        "pattern": "\\|",
        "container": true
    })))
    .unwrap();
    assert_eq!(container.after_add(), AfterAdd::EnterContainer);

    let leaf = PatternTokenType::from_rule(&rule(json!({"name": "x", "pattern": "x"}))).unwrap();
    assert_eq!(leaf.after_add(), AfterAdd::Stay);
}
