//! Applies parsed commands to a [`RootController`] and renders the result.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use shared::domain::ListItem;
use undo_core::{Effect, FinishEvent, FinishOutcome, HeaderIntent, Key, ListIntent, RootController};

use crate::command::{Command, HELP};

pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session {
    controller: RootController,
}

impl Session {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            controller: RootController::with_items(items),
        }
    }

    pub fn controller(&self) -> &RootController {
        &self.controller
    }

    pub fn render(&self) -> String {
        self.controller.view().to_string()
    }

    pub fn execute(&mut self, command: Command) -> Result<Step> {
        let mut out = String::new();
        match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Step::Continue(out));
            }
            Command::Show => {}
            Command::Add(text) => {
                if text.is_empty() {
                    bail!("nothing to add");
                }
                self.controller.add_item(text);
            }
            Command::Draft(text) => {
                self.controller.apply_header(HeaderIntent::Change(text));
            }
            Command::Submit => {
                if !self.controller.apply_header(HeaderIntent::KeyUp(Key::Enter)) {
                    writeln!(out, "header draft is empty")?;
                }
            }
            Command::Type { index, text } => {
                self.check_index(index)?;
                self.controller
                    .apply(ListIntent::Change { index, value: text });
            }
            Command::KeyUp { index, key } => {
                self.check_index(index)?;
                let outcome = self.controller.handle_finish(index, &FinishEvent::KeyUp(key));
                writeln!(out, "{}", describe(index, outcome))?;
            }
            Command::Blur(index) => {
                self.check_index(index)?;
                let outcome = self.controller.handle_finish(index, &FinishEvent::Blur);
                writeln!(out, "{}", describe(index, outcome))?;
            }
            Command::Delete(index) => {
                self.check_index(index)?;
                self.controller.apply(ListIntent::Delete { index });
            }
        }

        self.run_deferred(&mut out)?;
        if !self.controller.header().value().is_empty() {
            writeln!(out, "draft: {}", self.controller.header().value())?;
        }
        out.push_str(&self.render());
        Ok(Step::Continue(out))
    }

    /// Runs effects deferred by the command that just finished. A released
    /// focus produces the blur a real text field would see.
    fn run_deferred(&mut self, out: &mut String) -> Result<()> {
        for effect in self.controller.drain_effects() {
            match effect {
                Effect::ReleaseFocus { index } => {
                    let outcome = self.controller.handle_finish(index, &FinishEvent::Blur);
                    tracing::debug!(index, ?outcome, "focus released after commit");
                    writeln!(out, "row {index} released focus")?;
                }
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.controller.items().len();
        if index >= len {
            bail!("row {index} does not exist (list has {len} items)");
        }
        Ok(())
    }
}

fn describe(index: usize, outcome: FinishOutcome) -> String {
    match outcome {
        FinishOutcome::Ignored => format!("row {index}: key ignored"),
        FinishOutcome::Deleted => format!("row {index}: emptied, removed"),
        FinishOutcome::Committed => format!("row {index}: saved"),
        FinishOutcome::Reverted => format!("row {index}: edit reverted"),
        FinishOutcome::Unchanged => format!("row {index}: nothing to revert"),
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
