/// Entries shown before the list is expanded.
pub const INITIAL_VISIBLE: usize = 2;

pub const READ_MORE: &str = "Read More";
pub const SHOW_LESS: &str = "Show Less";

/// A borrowed list that shows its first entries until expanded. The
/// underlying sequence is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandableList<'a> {
    items: &'a [String],
    expanded: bool,
    empty_message: &'static str,
}

impl<'a> ExpandableList<'a> {
    pub fn new(items: &'a [String], expanded: bool, empty_message: &'static str) -> Self {
        Self {
            items,
            expanded,
            empty_message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.items.len() > INITIAL_VISIBLE
    }

    pub fn visible(&self) -> &'a [String] {
        if self.expanded {
            self.items
        } else {
            &self.items[..self.items.len().min(INITIAL_VISIBLE)]
        }
    }

    /// Label of the expand/collapse control, if the list needs one.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.has_more() {
            None
        } else if self.expanded {
            Some(SHOW_LESS)
        } else {
            Some(READ_MORE)
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
            ..self
        }
    }

    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }
}
