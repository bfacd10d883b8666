//! Display model of the list and the intents a front end sends back.

use std::fmt;

use crate::{edit::FinishEvent, edit::Key, list::UndoList};

pub const LIST_TITLE: &str = "In progress";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: &'static str,
    pub count: usize,
    pub rows: Vec<RowView>,
}

/// Builds the display model: one row per item in order and a count badge.
pub fn render(list: &UndoList) -> ListView {
    let rows = list
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| RowView {
            index,
            value: item.value.clone(),
        })
        .collect();
    ListView {
        title: LIST_TITLE,
        count: list.len(),
        rows,
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.count)?;
        for row in &self.rows {
            writeln!(f, "  {}: {}", row.index, row.value)?;
        }
        Ok(())
    }
}

/// User intent emitted by a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    Change { index: usize, value: String },
    Finish { index: usize, event: FinishEvent },
    Delete { index: usize },
}

/// User intent emitted by the header input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderIntent {
    Change(String),
    KeyUp(Key),
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ListItem;

    #[test]
    fn empty_list_renders_no_rows_and_zero_count() {
        let view = render(&UndoList::new());
        assert_eq!(view.count, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.to_string(), "In progress [0]\n");
    }

    #[test]
    fn rows_follow_list_order() {
        let list = UndoList::from_items(vec![ListItem::new("one"), ListItem::new("two")]);
        let view = render(&list);
        assert_eq!(view.count, 2);
        assert_eq!(
            view.rows,
            vec![
                RowView {
                    index: 0,
                    value: "one".to_string()
                },
                RowView {
                    index: 1,
                    value: "two".to_string()
                },
            ]
        );
        assert_eq!(view.to_string(), "In progress [2]\n  0: one\n  1: two\n");
    }

    #[test]
    fn count_includes_rows_with_empty_values() {
        let list = UndoList::from_items(vec![ListItem::new(""), ListItem::new("x")]);
        assert_eq!(render(&list).count, 2);
    }
}
