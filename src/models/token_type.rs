//! Token type catalog.
//!
//! Every token category is a [`TokenType`] strategy object. The [`TypeRegistry`] resolves a
//! type name to a [`TypeKey`] once, at node construction, and classifies raw input text.

use compact_str::CompactString;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::serialized::Attrs;

pub const OPERATOR: &str = "operator";
pub const NUMBER: &str = "number";
pub const PARENTHESES: &str = "parentheses";

const OPERATOR_SYMBOLS: [&str; 4] = ["+", "-", "*", "/"];
const NUMBER_PATTERN: &str = r"^[0-9]*\.?[0-9]+$";

/// Coarse classification used by validity predicates to check neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Number,
    Operator,
    Other(CompactString),
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name {
            NUMBER => Category::Number,
            OPERATOR => Category::Operator,
            other => Category::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Number => NUMBER,
            Category::Operator => OPERATOR,
            Category::Other(name) => name.as_str(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Category::Operator)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Category::Number)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from_name(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node sees when its validity is checked: the categories of its siblings within the
/// same container, and its own child count when it is a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood<'a> {
    pub prev: Option<&'a Category>,
    pub next: Option<&'a Category>,
    pub children: Option<usize>,
}

impl Neighborhood<'_> {
    /// Every present neighbor is an operator.
    pub fn operators_around(&self) -> bool {
        self.prev.map_or(true, Category::is_operator) && self.next.map_or(true, Category::is_operator)
    }

    /// Both neighbors exist and are numbers.
    pub fn between_numbers(&self) -> bool {
        self.prev.is_some_and(Category::is_number) && self.next.is_some_and(Category::is_number)
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some_and(|n| n > 0)
    }
}

/// Predicate used by types that do not declare their own.
pub fn default_is_valid(hood: &Neighborhood<'_>) -> bool {
    hood.operators_around() && hood.children.map_or(true, |n| n > 0)
}

/// What happens to the cursor right after a token of this type is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterAdd {
    #[default]
    Stay,
    EnterContainer,
}

/// Read-only view handed to render hooks.
#[derive(Debug, Clone, Copy)]
pub struct TokenView<'a> {
    pub value: Option<&'a str>,
    pub attrs: &'a Attrs,
    pub children: Option<usize>,
}

pub trait TokenType: fmt::Debug + Send + Sync {
    /// Match priority for `value`; `None` when the type does not accept it.
    fn match_value(&self, value: &str) -> Option<u32>;

    fn category(&self) -> Category {
        Category::Number
    }

    fn is_container(&self) -> bool {
        false
    }

    fn is_valid(&self, hood: &Neighborhood<'_>) -> bool {
        default_is_valid(hood)
    }

    fn default_attrs(&self) -> Attrs {
        Attrs::new()
    }

    /// Init hook: the value a freshly constructed node stores.
    fn init_value(&self, value: Option<&str>) -> Option<CompactString> {
        value.map(CompactString::from)
    }

    fn after_add(&self) -> AfterAdd {
        AfterAdd::Stay
    }

    /// Render hook for leaf tokens. `None` renders the stored value.
    fn render(&self, _token: &TokenView<'_>) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
pub struct OperatorType;

impl TokenType for OperatorType {
    fn match_value(&self, value: &str) -> Option<u32> {
        OPERATOR_SYMBOLS.contains(&value).then_some(1)
    }

    fn category(&self) -> Category {
        Category::Operator
    }

    fn is_valid(&self, hood: &Neighborhood<'_>) -> bool {
        hood.between_numbers()
    }
}

#[derive(Debug)]
pub struct NumberType {
    pattern: Regex,
}

impl NumberType {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(NUMBER_PATTERN).expect("number pattern is a valid regex"),
        }
    }
}

impl Default for NumberType {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenType for NumberType {
    fn match_value(&self, value: &str) -> Option<u32> {
        self.pattern.is_match(value).then_some(1)
    }
}

#[derive(Debug, Default)]
pub struct ParenthesesType;

impl TokenType for ParenthesesType {
    fn match_value(&self, value: &str) -> Option<u32> {
        (value == "(").then_some(1)
    }

    fn is_container(&self) -> bool {
        true
    }

    fn is_valid(&self, hood: &Neighborhood<'_>) -> bool {
        hood.has_children() && hood.operators_around()
    }

    fn init_value(&self, _value: Option<&str>) -> Option<CompactString> {
        None
    }

    fn after_add(&self) -> AfterAdd {
        AfterAdd::EnterContainer
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey(usize);

#[derive(Clone, Debug)]
struct RegisteredType {
    name: CompactString,
    token_type: Arc<dyn TokenType>,
}

/// Ordered, name-keyed set of token types. Registration order breaks classification ties.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<RegisteredType>,
    by_name: FxHashMap<CompactString, TypeKey>,
}

impl TypeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(OPERATOR, Arc::new(OperatorType));
        registry.register(NUMBER, Arc::new(NumberType::new()));
        registry.register(PARENTHESES, Arc::new(ParenthesesType));
        registry
    }

    /// Registers `token_type` under `name`. An existing type of the same name is replaced in
    /// its original slot.
    pub fn register(
        &mut self,
        name: impl Into<CompactString>,
        token_type: Arc<dyn TokenType>,
    ) -> TypeKey {
        let name = name.into();
        if let Some(&key) = self.by_name.get(&name) {
            self.entries[key.0].token_type = token_type;
            return key;
        }

        let key = TypeKey(self.entries.len());
        self.entries.push(RegisteredType {
            name: name.clone(),
            token_type,
        });
        self.by_name.insert(name, key);
        key
    }

    pub fn lookup(&self, name: &str) -> Option<TypeKey> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Keys are only handed out by this registry, so indexing cannot miss.
    pub fn get(&self, key: TypeKey) -> &dyn TokenType {
        self.entries[key.0].token_type.as_ref()
    }

    pub fn name(&self, key: TypeKey) -> &str {
        self.entries[key.0].name.as_str()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeKey, &str, &dyn TokenType)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (TypeKey(idx), entry.name.as_str(), entry.token_type.as_ref()))
    }

    /// Picks the type with the strictly highest match priority for `raw`.
    pub fn classify(&self, raw: &str) -> Option<TypeKey> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let mut winner: Option<(TypeKey, u32)> = None;
        for (key, _, token_type) in self.iter() {
            let Some(priority) = token_type.match_value(value) else {
                continue;
            };
            if priority > winner.map_or(0, |(_, best)| best) {
                winner = Some((key, priority));
            }
        }

        winner.map(|(key, _)| key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/token_type.rs"]
mod tests;
