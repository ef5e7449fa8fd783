use serde::{Deserialize, Serialize};

use super::config::EditorConfig;
use crate::models::TokenTypeRule;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_types: Vec<TokenTypeRule>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
