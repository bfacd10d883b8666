//! The canonical ordered sequence of undo items.

use shared::domain::ListItem;

/// Ordered list of items. Insertion order is display order and rows are
/// addressed by position, so every removal renumbers the rows after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoList {
    items: Vec<ListItem>,
}

impl UndoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn value(&self, index: usize) -> &str {
        self.check_index(index, "read");
        &self.items[index].value
    }

    /// Appends a new item at the end. No dedup.
    pub fn add(&mut self, value: impl Into<String>) {
        self.items.push(ListItem::new(value));
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete(&mut self, index: usize) -> ListItem {
        self.check_index(index, "delete");
        self.items.remove(index)
    }

    /// Replaces the value at `index`, leaving every other position alone.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        self.check_index(index, "update");
        self.items[index].value = value.into();
    }

    pub fn replace_all(&mut self, items: Vec<ListItem>) {
        self.items = items;
    }

    fn check_index(&self, index: usize, op: &str) {
        assert!(
            index < self.items.len(),
            "cannot {op} row {index}: list has {} items",
            self.items.len()
        );
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
