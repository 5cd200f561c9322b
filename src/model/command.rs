use serde::{Deserialize, Serialize};

use super::help::null_as_default;

/// Text that is either a single block or a list of alternatives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellText {
    Single(String),
    List(Vec<String>),
}

impl Default for CellText {
    fn default() -> Self {
        CellText::Single(String::new())
    }
}

impl CellText {
    pub fn is_empty(&self) -> bool {
        match self {
            CellText::Single(s) => s.is_empty(),
            CellText::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for CellText {
    fn from(s: &str) -> Self {
        CellText::Single(s.to_string())
    }
}

impl From<Vec<&str>> for CellText {
    fn from(items: Vec<&str>) -> Self {
        CellText::List(items.into_iter().map(str::to_string).collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: CellText,

    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: CellText,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: CellText,

    #[serde(default, deserialize_with = "null_as_default")]
    pub who_can_use: CellText,

    #[serde(default)]
    pub featured: bool,
}
