//! Bounded message log shown by frontends.
use std::collections::VecDeque;

use game_protocol::Player;

/// Severity of a log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Highlight,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
    /// Whose turn it was when the line was recorded, if known.
    pub turn_of: Option<Player>,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
            turn_of: None,
        }
    }

    pub fn during(mut self, player: Player) -> Self {
        self.turn_of = Some(player);
        self
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::new(text, MessageLevel::Info));
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push(MessageEntry::new("three", MessageLevel::Warning).during(Player::Player2));

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.recent(1).next().unwrap().turn_of, Some(Player::Player2));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.push_text("a");
        log.push_text("b");
        assert_eq!(log.len(), 1);
    }
}
