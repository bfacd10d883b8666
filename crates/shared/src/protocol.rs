use serde::{Deserialize, Serialize};

use crate::domain::ListItem;

/// Path of the startup GET that seeds the list.
pub const UNDO_LIST_PATH: &str = "/mock/undoList.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UndoListResponse {
    pub data: Vec<ListItem>,
}

impl UndoListResponse {
    pub fn new(data: Vec<ListItem>) -> Self {
        Self { data }
    }
}
