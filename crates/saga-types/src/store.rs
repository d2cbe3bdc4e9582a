//! The shared instruction store.
//!
//! Every compiled behavior lives in one bounded buffer of 32-bit words;
//! a behavior is just a start offset into it. Jump targets are absolute
//! indices, so cross-behavior jumps are representable but never emitted
//! — the resolver stops at each script's own end sentinel.

use crate::word::{Word, END_WORD};
use crate::{MAX_BEHAVIORS, STORE_CAPACITY};
use serde::{Deserialize, Serialize};

/// Handle to a registered behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehaviorId(pub u32);

/// The behavior substituted when a script file is missing.
pub const DEFAULT_BEHAVIOR: BehaviorId = BehaviorId(0);

/// The single bounded instruction buffer shared by all behaviors.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    words: Vec<Word>,
    starts: Vec<u32>,
    capacity: usize,
}

impl ScriptStore {
    pub fn new() -> Self {
        Self::with_capacity(STORE_CAPACITY)
    }

    /// A store with a reduced capacity, mainly for exhaustion tests.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::new(),
            starts: Vec::new(),
            capacity,
        }
    }

    /// Current write cursor — the next script's start offset.
    pub fn cursor(&self) -> u32 {
        self.words.len() as u32
    }

    /// Append one word. Returns false when the store is full; the caller
    /// rolls back to its saved cursor and fails that script alone.
    #[must_use]
    pub fn push(&mut self, word: Word) -> bool {
        if self.words.len() >= self.capacity {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Drop everything at and after `cursor` — a failed script's partial
    /// output must never be reachable.
    pub fn truncate(&mut self, cursor: u32) {
        self.words.truncate(cursor as usize);
    }

    /// Patch a previously emitted word in place (jump targets, operand
    /// counts).
    pub fn patch(&mut self, index: u32, word: Word) {
        self.words[index as usize] = word;
    }

    /// Read one word. Reads past the end yield the end sentinel so a
    /// desynced cursor terminates instead of walking foreign memory.
    pub fn word(&self, index: u32) -> Word {
        self.words
            .get(index as usize)
            .copied()
            .unwrap_or(END_WORD)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register a compiled script starting at `start`.
    pub fn register(&mut self, start: u32) -> Option<BehaviorId> {
        if self.starts.len() >= MAX_BEHAVIORS {
            return None;
        }
        let id = BehaviorId(self.starts.len() as u32);
        self.starts.push(start);
        Some(id)
    }

    pub fn start_of(&self, behavior: BehaviorId) -> u32 {
        self.starts
            .get(behavior.0 as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn behavior_count(&self) -> usize {
        self.starts.len()
    }
}

impl Default for ScriptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::FN_END;

    #[test]
    fn push_respects_capacity() {
        let mut store = ScriptStore::with_capacity(2);
        assert!(store.push(Word::raw(1)));
        assert!(store.push(Word::raw(2)));
        assert!(!store.push(Word::raw(3)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn truncate_rolls_back_a_failed_script() {
        let mut store = ScriptStore::with_capacity(8);
        assert!(store.push(Word::function(0, FN_END)));
        let mark = store.cursor();
        assert!(store.push(Word::raw(0xdead)));
        store.truncate(mark);
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), mark);
    }

    #[test]
    fn out_of_bounds_reads_terminate() {
        let store = ScriptStore::with_capacity(4);
        assert!(store.word(99).is_end());
    }

    #[test]
    fn behaviors_register_in_order() {
        let mut store = ScriptStore::with_capacity(16);
        let a = store.register(0).unwrap();
        let b = store.register(7).unwrap();
        assert_eq!(a, DEFAULT_BEHAVIOR);
        assert_eq!(store.start_of(a), 0);
        assert_eq!(store.start_of(b), 7);
        assert_eq!(store.behavior_count(), 2);
    }
}
