//! Headless editor core (state/action/services).

pub mod action;
pub mod editor;
pub mod input;
pub mod services;

pub use action::EditorAction;
pub use editor::{DispatchResult, FormulaEditor, FormulaOptions, RestoreError};
pub use input::{InputFeedback, InputState};
