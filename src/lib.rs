//! zformula - 公式 token 编辑器库
//!
//! 模块结构：
//! - core: 与前端无关的输入事件
//! - models: 数据模型（TypeRegistry, FormulaTree, SerializedNode）
//! - kernel: 编辑器核心（FormulaEditor, InputState, services）
//! - tui: 终端前端（crossterm + ratatui）

pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
