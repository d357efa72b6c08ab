use crate::document::Document;
use std::collections::HashMap;

/// Frequencies of one word across the documents that contain it.
///
/// `positions` maps a document title to its slot in `frequencies`. A document
/// without a slot has frequency 0, which is never stored explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyList {
    word: String,
    frequencies: Vec<u32>,
    positions: HashMap<String, usize>,
}

impl FrequencyList {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into(), frequencies: Vec::new(), positions: HashMap::new() }
    }

    pub fn build<'a, I>(word: impl Into<String>, documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut list = Self::new(word);
        for doc in documents {
            list.add_document(doc);
        }
        list
    }

    /// Record `doc` if it contains the word. Calling this twice for one document appends twice.
    pub fn add_document(&mut self, doc: &Document) {
        if !doc.contains(&self.word) {
            return;
        }
        let slot = self.frequencies.len();
        self.frequencies.push(doc.frequency(&self.word));
        self.positions.insert(doc.title().to_string(), slot);
    }

    pub fn frequency_in(&self, doc: &Document) -> u32 {
        self.positions
            .get(doc.title())
            .and_then(|&slot| self.frequencies.get(slot))
            .copied()
            .unwrap_or(0)
    }

    pub fn word(&self) -> &str { &self.word }

    pub fn frequencies(&self) -> &[u32] { &self.frequencies }

    pub fn position_of(&self, title: &str) -> Option<usize> { self.positions.get(title).copied() }

    /// Number of documents recorded for this word.
    pub fn len(&self) -> usize { self.frequencies.len() }

    pub fn is_empty(&self) -> bool { self.frequencies.is_empty() }
}
