//! Draft state of the "add item" input.

use tracing::debug;

use crate::edit::Key;

pub const HEADER_TITLE: &str = "TodoList";
pub const HEADER_PLACEHOLDER: &str = "Add Todo";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDraft {
    value: String,
}

impl HeaderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the text to add when Enter submits a non-empty draft, and
    /// clears the draft. Whitespace counts as content.
    pub fn on_key_up(&mut self, key: &Key) -> Option<String> {
        if !key.is_enter() || self.value.is_empty() {
            return None;
        }
        debug!(len = self.value.len(), "header draft submitted");
        Some(std::mem::take(&mut self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(HeaderDraft::new().value(), "");
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut draft = HeaderDraft::new();
        draft.on_change("new todo");
        assert_eq!(draft.value(), "new todo");

        assert_eq!(draft.on_key_up(&Key::Enter), Some("new todo".to_string()));
        assert_eq!(draft.value(), "");
    }

    #[test]
    fn enter_on_empty_draft_submits_nothing() {
        let mut draft = HeaderDraft::new();
        assert_eq!(draft.on_key_up(&Key::Enter), None);
    }

    #[test]
    fn other_keys_keep_the_draft() {
        let mut draft = HeaderDraft::new();
        draft.on_change("half");
        assert_eq!(draft.on_key_up(&Key::from_name("a")), None);
        assert_eq!(draft.value(), "half");
    }

    #[test]
    fn whitespace_only_draft_is_submitted() {
        let mut draft = HeaderDraft::new();
        draft.on_change("  ");
        assert_eq!(draft.on_key_up(&Key::Enter), Some("  ".to_string()));
    }
}
