use crate::document::Document;
use crate::error::{Error, Result};
use crate::frequency::FrequencyList;
use std::collections::{HashMap, HashSet};

/// One [`FrequencyList`] per vocabulary word of the documents the table was built from.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    lists: HashMap<String, FrequencyList>,
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    pub fn build_from(documents: &[Document]) -> Self {
        let words: HashSet<&str> = documents.iter().flat_map(|d| d.vocabulary()).collect();
        let lists: HashMap<String, FrequencyList> = words
            .into_iter()
            .map(|w| (w.to_string(), FrequencyList::build(w, documents)))
            .collect();
        tracing::info!(documents = documents.len(), words = lists.len(), "built frequency table");
        Self { lists }
    }

    /// Feed `doc` to every existing word list. Words that are new to the table are not indexed.
    pub fn add_document(&mut self, doc: &Document) -> Result<()> {
        if doc.is_empty() {
            return Err(Error::InvalidArgument("document has no words"));
        }
        for list in self.lists.values_mut() {
            list.add_document(doc);
        }
        Ok(())
    }

    /// Count of `word` in `doc`, read from the document itself.
    pub fn frequency_of(&self, word: &str, doc: &Document) -> Result<u32> {
        Self::check_lookup(word, doc)?;
        Ok(doc.frequency(word))
    }

    /// Count of `word` in `doc` as recorded by this table; 0 when the word or document was never indexed.
    pub fn indexed_frequency(&self, word: &str, doc: &Document) -> Result<u32> {
        Self::check_lookup(word, doc)?;
        Ok(self.lists.get(word).map_or(0, |list| list.frequency_in(doc)))
    }

    fn check_lookup(word: &str, doc: &Document) -> Result<()> {
        if doc.is_empty() {
            return Err(Error::InvalidArgument("document has no words"));
        }
        if word.is_empty() {
            return Err(Error::InvalidArgument("word is empty"));
        }
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<&FrequencyList> { self.lists.get(word) }

    pub fn contains_word(&self, word: &str) -> bool { self.lists.contains_key(word) }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ { self.lists.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.lists.len() }

    pub fn is_empty(&self) -> bool { self.lists.is_empty() }
}
