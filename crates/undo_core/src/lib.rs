//! Core state for the undo list: the item sequence, the row edit state
//! machine, the header draft, and the controller wiring them together.

pub mod controller;
pub mod deferred;
pub mod edit;
pub mod header;
pub mod list;
pub mod source;
pub mod view;

pub use controller::RootController;
pub use deferred::{DeferredQueue, Effect};
pub use edit::{EditState, FinishEvent, FinishOutcome, Key, RowEditMachine};
pub use header::{HeaderDraft, HEADER_PLACEHOLDER, HEADER_TITLE};
pub use list::UndoList;
pub use source::{load_initial_items, FetchError, HttpListSource, ListSource, StaticListSource};
pub use view::{render, HeaderIntent, ListIntent, ListView, RowView, LIST_TITLE};
