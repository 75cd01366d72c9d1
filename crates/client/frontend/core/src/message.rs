//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Position of the entry in the session, starting at 1.
    pub sequence: u64,
    pub level: MessageLevel,
}

/// Bounded buffer of messages shown to the user; oldest entries fall off.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_sequence: 1,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, level: MessageLevel) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text: text.into(),
            sequence: self.next_sequence,
            level,
        });
        self.next_sequence += 1;
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(message, MessageLevel::Info);
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(message, MessageLevel::Warning);
    }

    /// Most recent entries, newest first.
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
