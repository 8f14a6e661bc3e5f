//! FAQ accordion state.
//!
//! At most one entry is open. State is keyed by list position, not by the
//! entry's content.

/// Which FAQ entry, if any, is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// All entries collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it (closing any other).
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// The state a click on `index` leads to.
    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }

    /// Query string that reproduces this state on the region page.
    pub fn query(&self) -> String {
        match self.open {
            Some(index) => format!("?faq={index}"),
            None => String::new(),
        }
    }
}
