//! Backend worker: runs network work off the UI thread.

pub mod commands;
pub mod runtime;
