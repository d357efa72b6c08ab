use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{title}' from {path}: {source}")]
    Io {
        title: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// One side of a comparison has no retained tokens, so its vector has zero magnitude.
    #[error("similarity between '{first}' and '{second}' is undefined: empty document")]
    UndefinedSimilarity { first: String, second: String },

    #[error("threshold {0}% is outside 0..=100")]
    InvalidThreshold(u32),
}
