use std::path::Path;

#[test]
fn formula_path_defaults_to_cwd() {
    let cwd = Path::new("/work");
    assert_eq!(
        super::resolve_formula_path(cwd, None),
        cwd.join("formula.json")
    );
}

#[test]
fn formula_path_resolves_relative_args() {
    let cwd = Path::new("/work");
    assert_eq!(
        super::resolve_formula_path(cwd, Some("data/f.json")),
        cwd.join("data/f.json")
    );
}

#[test]
fn formula_path_keeps_absolute_args() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.json");
    let arg = file.to_str().unwrap();
    assert_eq!(super::resolve_formula_path(Path::new("/work"), Some(arg)), file);
}

#[test]
fn esc_and_ctrl_c_quit() {
    use zformula::core::event::{InputEvent, KeyCode, KeyEvent};

    assert!(super::is_quit(&InputEvent::Key(KeyEvent::simple(KeyCode::Esc))));
    assert!(super::is_quit(&InputEvent::Key(KeyEvent::ctrl(KeyCode::Char('c')))));
    assert!(!super::is_quit(&InputEvent::Key(KeyEvent::simple(KeyCode::Char('c')))));
    assert!(!super::is_quit(&InputEvent::Paste("q".to_string())));
}
