use super::*;
use crate::core::event::{KeyCode, KeyEvent};
use crate::kernel::services::adapters::MemorySink;
use crate::kernel::FormulaOptions;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn editor_with(text: &str) -> FormulaEditor<MemorySink> {
    let mut editor = FormulaEditor::new(FormulaOptions::default(), MemorySink::new());
    for ch in text.chars() {
        editor.handle_key(&KeyEvent::simple(KeyCode::Char(ch)));
    }
    editor
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn test_formula_line_places_input_at_cursor() {
    let mut editor = editor_with("5 + 3 ");
    editor.handle_key(&KeyEvent::simple(KeyCode::Left));

    assert_eq!(line_text(&formula_line(&editor)), "5 +    3");
}

#[test]
fn test_formula_line_draws_containers() {
    let editor = editor_with("( 1 ");
    assert_eq!(line_text(&formula_line(&editor)), "(1   )");
}

#[test]
fn test_invalid_token_is_highlighted() {
    let editor = editor_with("5 + ");
    let line = formula_line(&editor);
    let plus = line
        .spans
        .iter()
        .find(|span| span.content == "+")
        .unwrap();
    assert_eq!(plus.style.fg, Some(Color::Red));

    let five = line.spans.iter().find(|span| span.content == "5").unwrap();
    assert_eq!(five.style.fg, None);
}

#[test]
fn test_status_line_reports_validity() {
    let editor = editor_with("5 + ");
    let text = line_text(&status_line(&editor, Some("restore failed")));
    assert!(text.starts_with("invalid"));
    assert!(text.contains("2 tokens"));
    assert!(text.contains("*"));
    assert!(text.ends_with("restore failed"));

    let empty = editor_with("");
    assert_eq!(line_text(&status_line(&empty, None)), "valid  0 tokens");
}

#[test]
fn test_render_to_test_backend() {
    let editor = editor_with("7 ");
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| render(frame, frame.area(), &editor, None))
        .unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("formula"));
    assert!(screen.contains(r#"[{"type":"number","value":"7"}]"#));
    assert!(screen.contains("valid"));
}

#[derive(Debug)]
struct Pi;

impl crate::models::TokenType for Pi {
    fn match_value(&self, value: &str) -> Option<u32> {
        (value == "pi").then_some(1)
    }

    fn render(&self, _token: &TokenView<'_>) -> Option<String> {
        Some("π".to_string())
    }
}

#[test]
fn test_render_hook_replaces_value() {
    let options = FormulaOptions::default().with_type("pi", std::sync::Arc::new(Pi));
    let mut editor = FormulaEditor::new(options, MemorySink::new());
    for ch in "2 * pi ".chars() {
        editor.handle_key(&KeyEvent::simple(KeyCode::Char(ch)));
    }

    assert_eq!(line_text(&formula_line(&editor)), "2 * π   ");
    assert_eq!(editor.get_formula()[2].value.as_deref(), Some("pi"));
}
