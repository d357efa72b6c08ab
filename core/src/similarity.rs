use crate::document::Document;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Minimum rounded similarity, in percent, for a pair to be reported as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Threshold(u32);

impl Threshold {
    pub fn new(percent: u32) -> Result<Self> {
        if percent > 100 {
            return Err(Error::InvalidThreshold(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u32 { self.0 }
}

/// Cosine of the angle between the raw count vectors of `a` and `b`.
///
/// Fails with [`Error::UndefinedSimilarity`] when either document has no words.
pub fn cosine_similarity(a: &Document, b: &Document) -> Result<f64> {
    // Words missing from either side contribute nothing to the dot product.
    let (small, large) = if a.distinct_words() <= b.distinct_words() { (a, b) } else { (b, a) };
    let mut dot = 0u64;
    for (word, count) in small.frequencies() {
        dot += count as u64 * large.frequency(word) as u64;
    }
    let mag_a = magnitude_squared(a);
    let mag_b = magnitude_squared(b);
    if mag_a == 0 || mag_b == 0 {
        return Err(Error::UndefinedSimilarity { first: a.title().to_string(), second: b.title().to_string() });
    }
    Ok(dot as f64 / ((mag_a as f64).sqrt() * (mag_b as f64).sqrt()))
}

fn magnitude_squared(doc: &Document) -> u64 {
    doc.frequencies().map(|(_, c)| c as u64 * c as u64).sum()
}

/// Similarity rounded to the nearest whole percent.
pub fn to_percent(similarity: f64) -> u32 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Similarity {
    pub title: String,
    pub percent: u32,
}

/// Every other document's similarity to `title`, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarityRow {
    pub title: String,
    pub similarities: Vec<Similarity>,
}

/// An unordered pair at or above the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub first: String,
    pub second: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarityReport {
    pub threshold: Threshold,
    pub rows: Vec<SimilarityRow>,
    pub matches: Vec<Match>,
}

impl SimilarityReport {
    pub fn row(&self, title: &str) -> Option<&SimilarityRow> {
        self.rows.iter().find(|r| r.title == title)
    }
}

/// Compare every document against every other one, ordered by title.
///
/// Each row lists both directions of a pair; each qualifying unordered pair
/// appears once in `matches`. A comparison involving an empty document scores 0%
/// and is never reported as a match, whatever the threshold.
pub fn analyze(documents: &[Document], threshold: Threshold) -> SimilarityReport {
    let mut ordered: Vec<&Document> = documents.iter().collect();
    ordered.sort_by(|a, b| a.title().cmp(b.title()));

    let mut rows = Vec::with_capacity(ordered.len());
    let mut matches = Vec::new();
    let mut reported: HashSet<(&str, &str)> = HashSet::new();
    let mut compared = 0usize;

    for p1 in &ordered {
        let mut similarities = Vec::with_capacity(ordered.len().saturating_sub(1));
        for p2 in &ordered {
            if p1.title().to_lowercase() == p2.title().to_lowercase() {
                continue;
            }
            compared += 1;
            let (percent, defined) = match cosine_similarity(p1, p2) {
                Ok(sim) => (to_percent(sim), true),
                Err(err) => {
                    tracing::debug!(error = %err, "scoring pair as 0%, never a match");
                    (0, false)
                }
            };
            similarities.push(Similarity { title: p2.title().to_string(), percent });

            if defined && percent >= threshold.percent() && reported.insert((p1.title(), p2.title())) {
                reported.insert((p2.title(), p1.title()));
                matches.push(Match { first: p1.title().to_string(), second: p2.title().to_string(), percent });
            }
        }
        rows.push(SimilarityRow { title: p1.title().to_string(), similarities });
    }

    tracing::info!(documents = ordered.len(), compared, matches = matches.len(), threshold = threshold.percent(), "similarity sweep complete");
    SimilarityReport { threshold, rows, matches }
}
