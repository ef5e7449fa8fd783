//! Token types declared as data (settings file) instead of code.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::serialized::Attrs;
use super::token_type::{default_is_valid, AfterAdd, Category, Neighborhood, TokenType};

fn default_priority() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTypeRule {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub container: bool,
    pub pattern: String,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attr: Attrs,
}

#[derive(Debug)]
pub struct PatternTokenType {
    pattern: Regex,
    category: Category,
    container: bool,
    priority: u32,
    attrs: Attrs,
}

impl PatternTokenType {
    /// The pattern must match the whole (trimmed) input.
    pub fn from_rule(rule: &TokenTypeRule) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{})$", rule.pattern))?;
        Ok(Self {
            pattern,
            category: rule.category.clone(),
            container: rule.container,
            priority: rule.priority,
            attrs: rule.attr.clone(),
        })
    }
}

impl TokenType for PatternTokenType {
    fn match_value(&self, value: &str) -> Option<u32> {
        self.pattern.is_match(value).then_some(self.priority)
    }

    fn category(&self) -> Category {
        self.category.clone()
    }

    fn is_container(&self) -> bool {
        self.container
    }

    fn is_valid(&self, hood: &Neighborhood<'_>) -> bool {
        default_is_valid(hood)
    }

    fn default_attrs(&self) -> Attrs {
        self.attrs.clone()
    }

    fn after_add(&self) -> AfterAdd {
        if self.container {
            AfterAdd::EnterContainer
        } else {
            AfterAdd::Stay
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/pattern_type.rs"]
mod tests;
