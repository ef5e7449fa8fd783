//! 核心抽象：与前端无关的输入事件

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
