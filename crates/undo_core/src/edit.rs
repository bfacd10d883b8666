//! Per-row edit session: backup on first change, revert on blur, commit on
//! Enter, delete when committed empty.

use tracing::debug;

use crate::list::UndoList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl Key {
    /// Maps a key name as typed on a terminal or reported by a toolkit.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("enter") || name.eq_ignore_ascii_case("return") {
            Self::Enter
        } else {
            Self::Other(name.to_string())
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter)
    }
}

/// Events that may end an edit session on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishEvent {
    KeyUp(Key),
    Blur,
}

/// Edit state shared by every row. There is one backup slot for the whole
/// list, so only one row may be mid-edit at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        backup: String,
    },
}

impl EditState {
    pub fn backup(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { backup } => Some(backup),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// A key other than Enter; nothing happened.
    Ignored,
    /// Enter on an empty value removed the row.
    Deleted,
    /// Enter accepted the current value. The caller must release focus
    /// after the current handler returns.
    Committed,
    /// Focus was lost mid-edit and the pre-edit value was restored.
    Reverted,
    /// Focus was lost without an active edit.
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct RowEditMachine {
    state: EditState,
}

impl RowEditMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Records `value` as the row's new text. The first change of a session
    /// captures the prior value as the backup.
    pub fn on_change(&mut self, list: &mut UndoList, index: usize, value: impl Into<String>) {
        if let EditState::Idle = self.state {
            self.state = EditState::Editing {
                backup: list.value(index).to_string(),
            };
            debug!(index, "edit session started");
        }
        list.set_value(index, value);
    }

    pub fn on_finish(
        &mut self,
        list: &mut UndoList,
        index: usize,
        event: &FinishEvent,
    ) -> FinishOutcome {
        match event {
            FinishEvent::KeyUp(key) if !key.is_enter() => FinishOutcome::Ignored,
            FinishEvent::KeyUp(_) => {
                self.state = EditState::Idle;
                if list.value(index).is_empty() {
                    list.delete(index);
                    debug!(index, len = list.len(), "empty commit removed row");
                    FinishOutcome::Deleted
                } else {
                    debug!(index, "edit committed");
                    FinishOutcome::Committed
                }
            }
            FinishEvent::Blur => match std::mem::take(&mut self.state) {
                EditState::Idle => FinishOutcome::Unchanged,
                EditState::Editing { backup } => {
                    list.set_value(index, backup);
                    debug!(index, "edit reverted on blur");
                    FinishOutcome::Reverted
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
