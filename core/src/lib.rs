pub mod corpus;
pub mod document;
pub mod error;
pub mod frequency;
pub mod similarity;
pub mod table;
pub mod tokenizer;

pub use corpus::{load_corpus, Corpus, IoPolicy, LoadOptions};
pub use document::Document;
pub use error::{Error, Result};
pub use frequency::FrequencyList;
pub use similarity::{analyze, cosine_similarity, to_percent, Match, Similarity, SimilarityReport, SimilarityRow, Threshold};
pub use table::FrequencyTable;

/// File name that is never ingested as a document.
pub const STOP_WORDS_FILE: &str = "StopWords.txt";
