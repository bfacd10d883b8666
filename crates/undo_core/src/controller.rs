//! Root controller: owns the list and routes user intents into mutations.

use shared::domain::ListItem;
use tracing::{debug, warn};

use crate::{
    deferred::{DeferredQueue, Effect},
    edit::{EditState, FinishEvent, FinishOutcome, Key, RowEditMachine},
    header::HeaderDraft,
    list::UndoList,
    view::{render, HeaderIntent, ListIntent, ListView},
};

#[derive(Debug, Default)]
pub struct RootController {
    list: UndoList,
    edit: RowEditMachine,
    header: HeaderDraft,
    effects: DeferredQueue<Effect>,
}

impl RootController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ListItem>) -> Self {
        Self {
            list: UndoList::from_items(items),
            ..Self::default()
        }
    }

    /// Replaces the list with items from the data source.
    pub fn seed(&mut self, items: Vec<ListItem>) {
        debug!(len = items.len(), "seeding undo list");
        self.list.replace_all(items);
    }

    pub fn items(&self) -> &[ListItem] {
        self.list.items()
    }

    pub fn edit_state(&self) -> &EditState {
        self.edit.state()
    }

    pub fn header(&self) -> &HeaderDraft {
        &self.header
    }

    pub fn view(&self) -> ListView {
        render(&self.list)
    }

    pub fn add_item(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            warn!("ignoring request to add an empty item");
            return;
        }
        self.list.add(value);
        debug!(len = self.list.len(), "item added");
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_item(&mut self, index: usize) {
        self.list.delete(index);
        debug!(index, len = self.list.len(), "item deleted");
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn value_change(&mut self, index: usize, value: impl Into<String>) {
        self.edit.on_change(&mut self.list, index, value);
    }

    /// Ends or ignores the edit session on row `index`. A commit schedules a
    /// focus release that only becomes visible through [`Self::drain_effects`].
    pub fn handle_finish(&mut self, index: usize, event: &FinishEvent) -> FinishOutcome {
        let outcome = self.edit.on_finish(&mut self.list, index, event);
        if outcome == FinishOutcome::Committed {
            self.effects.schedule(Effect::ReleaseFocus { index });
        }
        outcome
    }

    pub fn apply(&mut self, intent: ListIntent) -> Option<FinishOutcome> {
        match intent {
            ListIntent::Change { index, value } => {
                self.value_change(index, value);
                None
            }
            ListIntent::Finish { index, event } => Some(self.handle_finish(index, &event)),
            ListIntent::Delete { index } => {
                self.delete_item(index);
                None
            }
        }
    }

    /// Applies a header intent. Returns `true` when it added an item.
    pub fn apply_header(&mut self, intent: HeaderIntent) -> bool {
        match intent {
            HeaderIntent::Change(value) => {
                self.header.on_change(value);
                false
            }
            HeaderIntent::KeyUp(key) => self.submit_header(&key),
        }
    }

    fn submit_header(&mut self, key: &Key) -> bool {
        match self.header.on_key_up(key) {
            Some(value) => {
                self.add_item(value);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Takes the effects deferred by previous handlers.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
