//! Header and list panels. Panels never touch the controller; they return
//! the intents the user expressed during the frame.

use eframe::egui;
use undo_core::{
    FinishEvent, HeaderDraft, HeaderIntent, Key, ListIntent, ListView, HEADER_PLACEHOLDER,
    HEADER_TITLE,
};

const HEADER_INPUT_ID: &str = "header_input";

pub fn row_id(index: usize) -> egui::Id {
    egui::Id::new(("undo_list_row", index))
}

/// Index of the list row that holds keyboard focus, if any.
pub fn focused_row(ctx: &egui::Context, len: usize) -> Option<usize> {
    let focused = ctx.memory(|mem| mem.focused())?;
    (0..len).find(|&index| row_id(index) == focused)
}

/// Per-frame signals from one row's text field.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSignals {
    pub changed: bool,
    pub lost_focus: bool,
    pub enter_pressed: bool,
}

/// Translates a row's text field signals into intents, change first.
pub fn row_intents(index: usize, text: &str, signals: RowSignals) -> Vec<ListIntent> {
    let mut intents = Vec::new();
    if signals.changed {
        intents.push(ListIntent::Change {
            index,
            value: text.to_string(),
        });
    }
    if signals.lost_focus {
        let event = if signals.enter_pressed {
            FinishEvent::KeyUp(Key::Enter)
        } else {
            FinishEvent::Blur
        };
        intents.push(ListIntent::Finish { index, event });
    }
    intents
}

/// Translates header text field signals into intents.
pub fn header_intents(text: &str, signals: RowSignals) -> Vec<HeaderIntent> {
    let mut intents = Vec::new();
    if signals.changed {
        intents.push(HeaderIntent::Change(text.to_string()));
    }
    if signals.lost_focus && signals.enter_pressed {
        intents.push(HeaderIntent::KeyUp(Key::Enter));
    }
    intents
}

pub fn show_header(ui: &mut egui::Ui, draft: &HeaderDraft) -> Vec<HeaderIntent> {
    let mut text = draft.value().to_string();
    let mut intents = Vec::new();
    ui.horizontal(|ui| {
        ui.heading(HEADER_TITLE);
        ui.add_space(12.0);
        let response = ui.add_sized(
            [ui.available_width(), 30.0],
            egui::TextEdit::singleline(&mut text)
                .id(egui::Id::new(HEADER_INPUT_ID))
                .hint_text(HEADER_PLACEHOLDER),
        );
        let signals = RowSignals {
            changed: response.changed(),
            lost_focus: response.lost_focus(),
            enter_pressed: ui.input(|i| i.key_pressed(egui::Key::Enter)),
        };
        intents = header_intents(&text, signals);
        // Keep typing after a submit.
        if signals.lost_focus && signals.enter_pressed {
            response.request_focus();
        }
    });
    intents
}

pub fn show_list(ui: &mut egui::Ui, view: &ListView) -> Vec<ListIntent> {
    let mut intents = Vec::new();

    ui.horizontal(|ui| {
        ui.strong(view.title);
        ui.label(egui::RichText::new(view.count.to_string()).strong().monospace());
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in &view.rows {
            let mut text = row.value.clone();
            let mut delete_clicked = false;
            ui.horizontal(|ui| {
                let response = ui.add_sized(
                    [ui.available_width() - 36.0, 26.0],
                    egui::TextEdit::singleline(&mut text).id(row_id(row.index)),
                );
                let signals = RowSignals {
                    changed: response.changed(),
                    lost_focus: response.lost_focus(),
                    enter_pressed: ui.input(|i| i.key_pressed(egui::Key::Enter)),
                };
                intents.extend(row_intents(row.index, &text, signals));
                delete_clicked = ui.button("-").on_hover_text("Delete").clicked();
            });
            if delete_clicked {
                intents.push(ListIntent::Delete { index: row.index });
                // Later row indices are stale once a row is removed.
                break;
            }
        }
    });

    intents
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
