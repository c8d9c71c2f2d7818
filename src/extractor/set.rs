//! The mnemonic set accumulates every distinct mnemonic seen during a run.
//!
//! Iteration is always in first-seen order, so the same input listing
//! produces the same output listing on every platform.
use std::collections::HashMap;

/// Order in which mnemonics are written to the output listing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputOrder {
    /// Order of first appearance in the input listing.
    FirstSeen,
    /// Byte-wise ascending.
    Lexicographic,
}

impl Default for OutputOrder {
    fn default() -> Self {
        OutputOrder::FirstSeen
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    pub mnemonic: String,
    /// 1-based line number the mnemonic first appeared on.
    pub first_line: usize,
    pub occurrences: usize,
}

#[derive(Default, Debug)]
pub struct MnemonicSet {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl MnemonicSet {
    pub fn new() -> Self {
        MnemonicSet::default()
    }

    /// Records one occurrence of `mnemonic`.
    /// Returns true if this is the first time it has been seen.
    pub fn insert(&mut self, mnemonic: &str, line: usize) -> bool {
        if let Some(&idx) = self.index.get(mnemonic) {
            self.entries[idx].occurrences += 1;
            return false;
        }

        self.index.insert(mnemonic.to_owned(), self.entries.len());
        self.entries.push(Entry {
            mnemonic: mnemonic.to_owned(),
            first_line: line,
            occurrences: 1,
        });
        true
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.index.contains_key(mnemonic)
    }

    /// Number of times `mnemonic` was inserted, 0 if never.
    pub fn occurrences(&self, mnemonic: &str) -> usize {
        match self.index.get(mnemonic) {
            Some(&idx) => self.entries[idx].occurrences,
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn ordered(&self, order: OutputOrder) -> Vec<&Entry> {
        let mut out: Vec<&Entry> = self.iter().collect();
        if order == OutputOrder::Lexicographic {
            out.sort_by(|a, b| a.mnemonic.cmp(&b.mnemonic));
        }
        out
    }
}
