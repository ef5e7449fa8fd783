use super::*;

#[test]
fn test_empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.token_types.is_empty());
}

#[test]
fn test_token_types_are_parsed() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "editor": {"commit_on_space": false},
            "token_types": [
                {"name": "variable", "pattern": "[a-z]+", "priority": 2}
            ]
        }"#,
    )
    .unwrap();

    assert!(!settings.editor.commit_on_space);
    assert_eq!(settings.editor.max_input_len, 30);
    assert_eq!(settings.token_types.len(), 1);
    assert_eq!(settings.token_types[0].name, "variable");
    assert_eq!(settings.token_types[0].priority, 2);
}

#[test]
fn test_default_settings_omit_empty_token_types() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert!(json.get("token_types").is_none());
    assert!(json.get("editor").is_some());
}
