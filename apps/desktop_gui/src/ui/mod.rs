//! UI layer for the desktop GUI: app shell, header, and list panels.

pub mod app;
pub mod panels;

pub use app::UndoListApp;
