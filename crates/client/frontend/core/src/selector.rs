//! Linear list selector for action names.
use crate::input::Input;

/// Ordered list of choices with a highlighted index.
///
/// Down advances, Up goes back, both wrap. An empty selector is inert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    items: Vec<String>,
    index: usize,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list and highlights its first entry.
    pub fn set_selections(&mut self, items: Vec<String>) {
        self.items = items;
        self.index = 0;
    }

    pub fn move_cursor(&mut self, input: Input) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = match input {
            Input::Down => (self.index + 1) % len,
            Input::Up => (self.index + len - 1) % len,
            _ => self.index,
        };
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.items.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index = 0;
    }
}
