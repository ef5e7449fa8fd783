//! One formula editor instance: the token tree, the input surface at its cursor, and the
//! persisted-state sink it publishes to.

use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::action::EditorAction;
use super::input::{InputFeedback, InputState};
use super::services::ports::{EditorConfig, OutputSink, Settings};
use crate::core::event::{InputEvent, KeyEvent};
use crate::models::{
    parse_formula, Attrs, FormulaError, FormulaTree, NodeId, PatternTokenType, Placement,
    SerializedNode, TokenType, TypeKey, TypeRegistry,
};

#[derive(Debug, Clone)]
pub struct FormulaOptions {
    pub id: u64,
    /// Merged over the built-in types by name.
    pub types: Vec<(CompactString, Arc<dyn TokenType>)>,
    pub config: EditorConfig,
}

impl Default for FormulaOptions {
    fn default() -> Self {
        Self {
            id: 1,
            types: Vec::new(),
            config: EditorConfig::default(),
        }
    }
}

impl FormulaOptions {
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_type(mut self, name: impl Into<CompactString>, ty: Arc<dyn TokenType>) -> Self {
        self.types.push((name.into(), ty));
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Rules whose pattern does not compile are skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut options = Self::default().with_config(settings.editor.clone());
        for rule in &settings.token_types {
            match PatternTokenType::from_rule(rule) {
                Ok(ty) => options = options.with_type(rule.name.as_str(), Arc::new(ty)),
                Err(err) => {
                    tracing::warn!(type_name = %rule.name, error = %err, "skip token type rule");
                }
            }
        }
        options
    }

    fn registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::with_builtins();
        for (name, ty) in &self.types {
            registry.register(name.clone(), Arc::clone(ty));
        }
        registry
    }
}

#[derive(Debug)]
pub enum RestoreError {
    Parse(serde_json::Error),
    Build(FormulaError),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::Parse(err) => write!(f, "formula is not valid json: {err}"),
            RestoreError::Build(err) => write!(f, "formula cannot be rebuilt: {err}"),
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestoreError::Parse(err) => Some(err),
            RestoreError::Build(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    pub state_changed: bool,
    pub inserted: Option<NodeId>,
}

pub struct FormulaEditor<S> {
    tree: FormulaTree,
    input: InputState,
    config: EditorConfig,
    sink: S,
}

impl<S: OutputSink> FormulaEditor<S> {
    /// Seeds the tree from the sink. A seed that fails to parse or rebuild is logged and the
    /// editor starts empty.
    pub fn new(options: FormulaOptions, sink: S) -> Self {
        let mut tree = FormulaTree::new(options.id, options.registry());
        tree.set_output_delay(options.config.output_delay());

        let mut editor = Self {
            tree,
            input: InputState::new(options.config.max_input_len),
            config: options.config,
            sink,
        };

        let seed = editor.sink.read().filter(|seed| !seed.trim().is_empty());
        if let Some(seed) = seed {
            if let Err(err) = editor.restore(&seed) {
                tracing::error!(tree = editor.tree.id(), error = %err, "restore failed");
            }
        }
        editor
    }

    pub fn restore(&mut self, text: &str) -> Result<(), RestoreError> {
        let formula = parse_formula(text).map_err(RestoreError::Parse)?;
        self.tree.set_formula(&formula).map_err(RestoreError::Build)
    }

    pub fn tree(&self) -> &FormulaTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut FormulaTree {
        &mut self.tree
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn get_formula(&self) -> Vec<SerializedNode> {
        self.tree.get_formula()
    }

    pub fn set_formula(&mut self, formula: &[SerializedNode]) -> Result<(), FormulaError> {
        self.tree.set_formula(formula)
    }

    pub fn is_valid(&self) -> bool {
        self.tree.is_valid()
    }

    pub fn add_element_at_cursor(
        &mut self,
        type_name: &str,
        value: &str,
        attrs: Option<Attrs>,
    ) -> Result<NodeId, FormulaError> {
        self.tree.add_element_at_cursor(type_name, value, attrs)
    }

    /// Type the pending text would commit as.
    pub fn classify_pending(&self) -> Option<TypeKey> {
        self.tree.registry().classify(self.input.text())
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> DispatchResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => {
                let mut result = DispatchResult::default();
                for ch in text.chars().filter(|ch| !ch.is_control()) {
                    let action = if ch == ' ' && self.config.commit_on_space {
                        EditorAction::Commit
                    } else {
                        EditorAction::InsertChar(ch)
                    };
                    let step = self.dispatch(action);
                    result.state_changed |= step.state_changed;
                    result.inserted = step.inserted.or(result.inserted);
                }
                result
            }
            _ => DispatchResult::default(),
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> DispatchResult {
        match EditorAction::from_key(key, self.config.commit_on_space) {
            Some(action) => self.dispatch(action),
            None if key.is_press() => DispatchResult {
                state_changed: self.input.clear_feedback(),
                inserted: None,
            },
            None => DispatchResult::default(),
        }
    }

    pub fn dispatch(&mut self, action: EditorAction) -> DispatchResult {
        let mut state_changed = self.input.clear_feedback();
        let mut inserted = None;

        match action {
            EditorAction::InsertChar(ch) => {
                state_changed |= self.input.push_char(ch);
                state_changed |= self.refresh_match();
            }
            EditorAction::Commit => {
                state_changed = true;
                inserted = self.commit();
            }
            EditorAction::Backspace if !self.input.is_blank() => {
                state_changed |= self.input.pop_char();
                state_changed |= self.refresh_match();
            }
            EditorAction::Backspace => state_changed |= self.tree.backspace(),
            EditorAction::Delete if self.input.is_blank() => {
                state_changed |= self.tree.delete_forward();
            }
            EditorAction::MoveLeft if self.input.is_blank() => {
                state_changed |= self.tree.move_left();
            }
            EditorAction::MoveRight if self.input.is_blank() => {
                state_changed |= self.tree.move_right();
            }
            EditorAction::Delete | EditorAction::MoveLeft | EditorAction::MoveRight => {}
            EditorAction::PlaceCursor { node, placement } => {
                match self.tree.place_cursor(node, placement) {
                    Ok(()) => state_changed = true,
                    Err(err) => {
                        tracing::warn!(tree = self.tree.id(), node = ?node, error = %err, "place cursor failed");
                    }
                }
            }
        }

        DispatchResult {
            state_changed,
            inserted,
        }
    }

    /// Pointer click on a token: the first half places the cursor ahead of it (or at the
    /// start inside a container), the second half after it (or at the end inside).
    pub fn click(&mut self, node: NodeId, first_half: bool) -> DispatchResult {
        let placement = match (self.tree.is_container_node(node), first_half) {
            (true, true) => Placement::Start,
            (true, false) => Placement::End,
            (false, true) => Placement::Before,
            (false, false) => Placement::After,
        };
        self.dispatch(EditorAction::PlaceCursor { node, placement })
    }

    fn refresh_match(&mut self) -> bool {
        if self.classify_pending().is_none() {
            return false;
        }
        self.input.set_feedback(InputFeedback::Match);
        true
    }

    fn commit(&mut self) -> Option<NodeId> {
        let Some(kind) = self.classify_pending() else {
            tracing::debug!(tree = self.tree.id(), text = self.input.text(), "no token type matches");
            self.input.set_feedback(InputFeedback::Error);
            return None;
        };

        let type_name = self.tree.registry().name(kind).to_string();
        let text = self.input.take_text();
        match self.tree.add_element_at_cursor(&type_name, text.trim(), None) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::error!(tree = self.tree.id(), error = %err, "commit token failed");
                self.input.set_feedback(InputFeedback::Error);
                None
            }
        }
    }

    /// Flushes a due output run to the sink. Returns whether the sink was written.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(json) = self.tree.take_due_output(now) else {
            return false;
        };
        match self.sink.write(&json) {
            Ok(()) => {
                tracing::debug!(tree = self.tree.id(), bytes = json.len(), "formula written");
                true
            }
            Err(err) => {
                tracing::error!(tree = self.tree.id(), error = %err, "write formula failed");
                false
            }
        }
    }

    /// Tears the editor down, dropping any pending output.
    pub fn close(mut self) -> S {
        self.tree.cancel_output();
        self.sink
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
