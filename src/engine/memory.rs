//! The bounded memory queue.
//!
//! Defer reassemblies push formatted entries here instead of replying; the
//! no-match path drains at most one entry per turn, oldest first. The queue
//! never exceeds its capacity: pushing at the bound drops the oldest entry.

use std::collections::VecDeque;

#[derive(Debug)]
pub(crate) struct MemoryQueue {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MemoryQueue {
    pub fn new(capacity: usize) -> Self {
        MemoryQueue { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, entry: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop_front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
