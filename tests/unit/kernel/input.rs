use super::*;

#[test]
fn test_push_respects_max_len() {
    let mut input = InputState::new(3);
    assert!(input.push_char('1'));
    assert!(input.push_char('2'));
    assert!(input.push_char('3'));
    assert!(!input.push_char('4'));
    assert_eq!(input.text(), "123");
}

#[test]
fn test_max_len_counts_chars_not_bytes() {
    let mut input = InputState::new(2);
    assert!(input.push_char('π'));
    assert!(input.push_char('é'));
    assert!(!input.push_char('x'));
}

#[test]
fn test_pop_and_take() {
    let mut input = InputState::new(30);
    assert!(!input.pop_char());
    input.push_char('4');
    input.push_char('2');
    assert!(input.pop_char());
    assert_eq!(input.text(), "4");
    assert_eq!(input.take_text(), "4");
    assert_eq!(input.text(), "");
}

#[test]
fn test_blank_ignores_whitespace() {
    let mut input = InputState::new(30);
    assert!(input.is_blank());
    input.push_char(' ');
    assert!(input.is_blank());
    input.push_char('7');
    assert!(!input.is_blank());
}

#[test]
fn test_feedback_clears_once() {
    let mut input = InputState::new(30);
    assert!(!input.clear_feedback());
    input.set_feedback(InputFeedback::Error);
    assert_eq!(input.feedback(), InputFeedback::Error);
    assert!(input.clear_feedback());
    assert_eq!(input.feedback(), InputFeedback::None);
    assert!(!input.clear_feedback());
}

#[test]
fn test_display_width_pads_text() {
    let mut input = InputState::new(30);
    assert_eq!(input.display_width(), 2);
    input.push_char('1');
    input.push_char('0');
    assert_eq!(input.display_width(), 4);
}
