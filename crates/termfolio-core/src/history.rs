//! Bounded command history with an up/down recall cursor.

use std::collections::VecDeque;

/// Default number of submitted lines kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Largest configurable history.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

/// Where a downward recall landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// A stored line.
    Entry(&'a str),
    /// Past the newest entry: an empty, fresh line.
    Fresh,
}

/// Previously submitted lines, oldest first.
///
/// The cursor ranges over `0..=len`; `len` means "fresh line".
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: usize,
}

impl History {
    /// Creates an empty history. A zero capacity is bumped to one. Storage
    /// grows as lines arrive.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::new(), capacity, cursor: 0 }
    }

    /// Records a submitted line, evicting the oldest entry on overflow, and
    /// moves the cursor back to the fresh line.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
        self.reset_cursor();
    }

    /// Steps one entry back in time. `None` when already at the oldest entry
    /// or when there is nothing recorded.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps one entry forward in time, landing on the fresh line after the
    /// newest entry.
    pub fn forward(&mut self) -> Recall<'_> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            match self.entries.get(self.cursor) {
                Some(line) => Recall::Entry(line),
                None => Recall::Fresh,
            }
        } else {
            self.cursor = self.entries.len();
            Recall::Fresh
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_fresh_line(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
