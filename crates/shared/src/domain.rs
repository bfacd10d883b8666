use serde::{Deserialize, Serialize};

/// One entry of the undo list. Items carry no id; a row is addressed by its
/// position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub value: String,
}

impl ListItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
