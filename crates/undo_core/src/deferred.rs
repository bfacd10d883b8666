//! Deferred effects that must run after the current event handler returns.

use std::collections::VecDeque;

/// Side effects a controller defers past the handler that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Release keyboard focus from the row at `index`.
    ReleaseFocus { index: usize },
}

/// FIFO of deferred work. Items scheduled during a handler become visible
/// only through [`DeferredQueue::drain`], which the event loop calls once the
/// handler has returned. Items scheduled while a drained batch is being
/// processed land in the next batch.
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, item: T) {
        self.pending.push_back(item);
    }

    pub fn drain(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
