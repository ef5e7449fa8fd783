//! Wire format of a formula: a JSON array of nested node objects.

use serde::{Deserialize, Deserializer, Serialize};

pub type Attrs = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attr: Attrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<SerializedNode>>,
}

impl SerializedNode {
    pub fn leaf(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
            attr: Attrs::new(),
            elements: None,
        }
    }

    pub fn container(kind: impl Into<String>, elements: Vec<SerializedNode>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            attr: Attrs::new(),
            elements: Some(elements),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Attrs, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Attrs>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn parse_formula(text: &str) -> serde_json::Result<Vec<SerializedNode>> {
    serde_json::from_str(text)
}

pub fn formula_to_string(formula: &[SerializedNode]) -> serde_json::Result<String> {
    serde_json::to_string(formula)
}

#[cfg(test)]
#[path = "../../tests/unit/models/serialized.rs"]
mod tests;
