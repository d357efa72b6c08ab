use crate::error::{Error, Result};
use crate::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// A text reduced to its title and the counts of its retained words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    frequencies: HashMap<String, u32>,
    word_count: usize,
}

impl Document {
    pub fn empty(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        let mut doc = Self::empty(title);
        doc.reparse(text);
        doc
    }

    /// Read and parse a file, failing with [`Error::Io`] if it cannot be read.
    pub fn from_path(title: impl Into<String>, path: &Path) -> Result<Self> {
        let title = title.into();
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::from_text(title, &text)),
            Err(source) => Err(Error::Io { title, path: path.to_path_buf(), source }),
        }
    }

    /// Like [`Document::from_path`], but an unreadable file is logged and yields an empty
    /// document, returned together with the read error.
    pub fn load_lenient(title: impl Into<String>, path: &Path) -> (Self, Option<Error>) {
        let title = title.into();
        match Self::from_path(title.clone(), path) {
            Ok(doc) => (doc, None),
            Err(err) => {
                tracing::warn!(error = %err, "treating unreadable document as empty");
                (Self::empty(title), Some(err))
            }
        }
    }

    /// Replace the frequency map and word count with those of `text`.
    pub fn reparse(&mut self, text: &str) {
        self.frequencies.clear();
        self.word_count = 0;
        for token in tokenize(text) {
            self.word_count += 1;
            *self.frequencies.entry(token).or_insert(0) += 1;
        }
        tracing::debug!(title = %self.title, words = self.word_count, distinct = self.frequencies.len(), "parsed document");
    }

    pub fn title(&self) -> &str { &self.title }

    pub fn word_count(&self) -> usize { self.word_count }

    pub fn frequency(&self, word: &str) -> u32 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool { self.frequencies.contains_key(word) }

    pub fn vocabulary(&self) -> HashSet<&str> {
        self.frequencies.keys().map(String::as_str).collect()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.frequencies.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Share of the retained tokens taken by `word`; 0.0 for an empty document.
    pub fn relative_frequency(&self, word: &str) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.word_count as f64
    }

    pub fn distinct_words(&self) -> usize { self.frequencies.len() }

    pub fn is_empty(&self) -> bool { self.frequencies.is_empty() }
}
