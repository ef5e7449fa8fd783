use super::*;
use crate::core::event::KeyEventKind;

fn action(code: KeyCode) -> Option<EditorAction> {
    EditorAction::from_key(&KeyEvent::simple(code), true)
}

#[test]
fn test_plain_keys_map_to_actions() {
    assert_eq!(action(KeyCode::Char('7')), Some(EditorAction::InsertChar('7')));
    assert_eq!(action(KeyCode::Enter), Some(EditorAction::Commit));
    assert_eq!(action(KeyCode::Char(' ')), Some(EditorAction::Commit));
    assert_eq!(action(KeyCode::Left), Some(EditorAction::MoveLeft));
    assert_eq!(action(KeyCode::Right), Some(EditorAction::MoveRight));
    assert_eq!(action(KeyCode::Backspace), Some(EditorAction::Backspace));
    assert_eq!(action(KeyCode::Delete), Some(EditorAction::Delete));
    assert_eq!(action(KeyCode::Up), None);
    assert_eq!(action(KeyCode::Tab), None);
}

#[test]
fn test_space_is_text_when_commit_on_space_is_off() {
    let key = KeyEvent::simple(KeyCode::Char(' '));
    assert_eq!(
        EditorAction::from_key(&key, false),
        Some(EditorAction::InsertChar(' '))
    );
}

#[test]
fn test_modified_and_released_keys_map_to_nothing() {
    assert_eq!(
        EditorAction::from_key(&KeyEvent::ctrl(KeyCode::Char('a')), true),
        None
    );
    let alt = KeyEvent::new(KeyCode::Left, KeyModifiers::ALT);
    assert_eq!(EditorAction::from_key(&alt, true), None);

    let mut release = KeyEvent::simple(KeyCode::Enter);
    release.kind = KeyEventKind::Release;
    assert_eq!(EditorAction::from_key(&release, true), None);

    let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
    assert_eq!(
        EditorAction::from_key(&shifted, true),
        Some(EditorAction::InsertChar('A'))
    );
}
