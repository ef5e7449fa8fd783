use super::*;

#[test]
fn test_write_default_settings_creates_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path), Some(Settings::default()));

    std::fs::write(&path, r#"{"editor": {"max_input_len": 12}}"#).unwrap();
    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.editor.max_input_len, 12);
}

#[test]
fn test_load_settings_from_missing_or_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings_from(&path), None);

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), None);
}

#[test]
fn test_settings_path_layout() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".zformula/settings.json"));
    }
}
