//! Pending (uncommitted) text typed at the cursor.

use unicode_width::UnicodeWidthStr;

/// Transient state shown on the input surface; cleared by the next key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFeedback {
    #[default]
    None,
    Match,
    Error,
}

#[derive(Debug, Clone)]
pub struct InputState {
    text: String,
    feedback: InputFeedback,
    max_len: usize,
}

impl InputState {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            feedback: InputFeedback::None,
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feedback(&self) -> InputFeedback {
        self.feedback
    }

    pub fn set_feedback(&mut self, feedback: InputFeedback) {
        self.feedback = feedback;
    }

    /// Returns whether there was something to clear.
    pub fn clear_feedback(&mut self) -> bool {
        std::mem::take(&mut self.feedback) != InputFeedback::None
    }

    /// Blank input lets navigation keys act on tokens.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= self.max_len {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Cells the input box occupies: the text plus two cells of padding.
    pub fn display_width(&self) -> usize {
        self.text.width() + 2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/input.rs"]
mod tests;
