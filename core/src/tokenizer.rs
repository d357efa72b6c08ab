use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Dash runs used as punctuation ("on--the", em/en dashes) separate words.
    static ref DASH: Regex = Regex::new("-{2,}|[\u{2013}\u{2014}]").expect("valid regex");
    // Everything that is not an ASCII letter or ASCII whitespace is dropped in place, so "don't" -> "dont".
    static ref STRIP: Regex = Regex::new(r"[^a-zA-Z \t\n\x0B\x0C\r]").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","hed","hell","hes","her","here","heres","hers","herself","him","himself","his","how","hows",
            "i","id","ill","im","ive","if","in","into","is","it","its","itself",
            "lets","me","more","most","my","myself",
            "nor","of","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","shed","shell","shes","should","so","some","such",
            "than","that","thats","the","their","theirs","them","themselves","then","there","theres","these","they","theyd","theyll","theyre","theyve","this","those","through","to","too",
            "under","until","up","very",
            "was","we","wed","well","were","weve","what","whats","when","whens","where","wheres","which","while","who","whos","whom","why","whys","with","would",
            "you","youd","youll","youre","youve","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Case-insensitive membership in the fixed English stop-word list.
pub fn is_stopword(token: &str) -> bool {
    if token.bytes().any(|b| b.is_ascii_uppercase()) {
        STOPWORDS.contains(token.to_ascii_lowercase().as_str())
    } else {
        STOPWORDS.contains(token)
    }
}

pub fn stopword_count() -> usize { STOPWORDS.len() }

/// Tokenize text into lowercase ASCII words with punctuation, digits and stop words removed.
/// Output order follows the input.
pub fn tokenize(text: &str) -> Vec<String> {
    let spaced = DASH.replace_all(text, " ");
    let cleaned = STRIP.replace_all(&spaced, "");
    cleaned
        .split_whitespace()
        .map(|field| field.to_ascii_lowercase())
        .filter(|token| !is_stopword(token))
        .collect()
}
