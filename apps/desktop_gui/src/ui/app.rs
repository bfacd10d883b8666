//! App shell: owns the controller, drains backend events, renders panels,
//! applies intents, then runs deferred effects.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use undo_core::{Effect, FinishEvent, FinishOutcome, HeaderIntent, ListIntent, RootController};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::panels::{focused_row, row_id, show_header, show_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

pub struct UndoListApp {
    ui_rx: Receiver<UiEvent>,
    controller: RootController,
    load_state: LoadState,
}

impl UndoListApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, server_url: String) -> Self {
        let load_state = match dispatch_backend_command(
            &cmd_tx,
            BackendCommand::FetchList { server_url },
        ) {
            Ok(()) => LoadState::Loading,
            Err(err) => {
                tracing::error!(error = err.message(), "could not request undo list");
                LoadState::Failed
            }
        };
        Self {
            ui_rx,
            controller: RootController::new(),
            load_state,
        }
    }

    pub fn controller(&self) -> &RootController {
        &self.controller
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ListLoaded(items) => {
                    self.controller.seed(items);
                    self.load_state = LoadState::Loaded;
                }
                UiEvent::LoadFailed(err) => {
                    // The list stays empty; the failure is only logged.
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        error = err.message(),
                        "undo list unavailable"
                    );
                    self.load_state = LoadState::Failed;
                }
            }
        }
    }

    pub fn apply_header_intents(&mut self, intents: Vec<HeaderIntent>) {
        for intent in intents {
            self.controller.apply_header(intent);
        }
    }

    /// Applies a frame's row intents. `focused_row` is the row holding
    /// keyboard focus when the frame started. A delete click takes focus from
    /// that row first, so an open edit on it is reverted before the delete
    /// lands. Returns the row settled that way.
    pub fn apply_list_intents(
        &mut self,
        intents: Vec<ListIntent>,
        focused_row: Option<usize>,
    ) -> Option<usize> {
        let mut settled = None;
        for intent in intents {
            if let ListIntent::Delete { .. } = intent {
                if settled.is_none() {
                    settled = self.settle_open_edit(focused_row);
                }
            }
            if let Some(FinishOutcome::Deleted) = self.controller.apply(intent) {
                // Indices after an empty-commit delete are stale.
                break;
            }
        }
        settled
    }

    fn settle_open_edit(&mut self, focused_row: Option<usize>) -> Option<usize> {
        let index = focused_row?;
        if !self.controller.edit_state().is_editing() || index >= self.controller.items().len() {
            return None;
        }
        let outcome = self.controller.handle_finish(index, &FinishEvent::Blur);
        tracing::debug!(index, ?outcome, "settled open edit before delete");
        Some(index)
    }

    fn run_deferred_effects(&mut self, ctx: &egui::Context) {
        for effect in self.controller.drain_effects() {
            match effect {
                Effect::ReleaseFocus { index } => {
                    ctx.memory_mut(|mem| mem.surrender_focus(row_id(index)));
                }
            }
        }
    }
}

impl eframe::App for UndoListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let focused_row = focused_row(ctx, self.controller.items().len());

        let header_intents = egui::TopBottomPanel::top("header_panel")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let intents = show_header(ui, self.controller().header());
                ui.add_space(6.0);
                intents
            })
            .inner;
        self.apply_header_intents(header_intents);

        let view = self.controller.view();
        let list_intents = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.load_state() == LoadState::Loading {
                    ui.weak("Loading…");
                }
                show_list(ui, &view)
            })
            .inner;
        if let Some(index) = self.apply_list_intents(list_intents, focused_row) {
            // The row at this position may now hold a different item.
            ctx.memory_mut(|mem| mem.surrender_focus(row_id(index)));
        }

        self.run_deferred_effects(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
