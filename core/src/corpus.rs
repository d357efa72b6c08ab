use crate::document::Document;
use crate::error::{Error, Result};
use crate::STOP_WORDS_FILE;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// What to do when a file in the corpus directory cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IoPolicy {
    /// Log the failure, keep an empty document and record its title in [`Corpus::failed`].
    #[default]
    Lenient,
    /// Abort loading with the read error.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub on_io_error: IoPolicy,
}

/// Documents loaded from one directory, sorted by title.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    /// Titles of files that could not be read under [`IoPolicy::Lenient`].
    pub failed: Vec<String>,
}

impl Corpus {
    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn get(&self, title: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.title() == title)
    }
}

/// Title for a corpus file: its name without a trailing `.txt`.
pub fn title_for(file_name: &str) -> &str {
    file_name.strip_suffix(".txt").unwrap_or(file_name)
}

/// Load every regular file directly inside `dir` as a document, skipping the stop-word file.
///
/// Symlinks are followed. Files are visited in name order; when a stripped title is
/// already taken (ignoring case), the later file keeps its full name as its title.
pub fn load_corpus<P: AsRef<Path>>(dir: P, options: &LoadOptions) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::Io {
            title: dir.display().to_string(),
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }
    let mut corpus = Corpus::default();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // A dangling link surfaces as a walk error on the entry itself.
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e.into_io_error().unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                let name = path.file_name().and_then(|n| n.to_str()).map(str::to_string);
                let name = match name {
                    Some(name) if path != dir && options.on_io_error == IoPolicy::Lenient => name,
                    _ => return Err(Error::Io { title: dir.display().to_string(), path, source }),
                };
                let title = unique_title(&mut seen, &name)?;
                let err = Error::Io { title: title.clone(), path, source };
                tracing::warn!(error = %err, "treating unreadable document as empty");
                corpus.failed.push(title.clone());
                corpus.documents.push(Document::empty(title));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
            continue;
        };
        if name == STOP_WORDS_FILE {
            continue;
        }
        let title = unique_title(&mut seen, name)?;
        let doc = match options.on_io_error {
            IoPolicy::Strict => Document::from_path(title, entry.path())?,
            IoPolicy::Lenient => {
                let (doc, err) = Document::load_lenient(title, entry.path());
                if err.is_some() {
                    corpus.failed.push(doc.title().to_string());
                }
                doc
            }
        };
        corpus.documents.push(doc);
    }

    corpus.documents.sort_by(|a, b| a.title().cmp(b.title()));
    corpus.failed.sort();
    tracing::info!(dir = %dir.display(), documents = corpus.documents.len(), failed = corpus.failed.len(), "loaded corpus");
    Ok(corpus)
}

fn unique_title(seen: &mut HashSet<String>, file_name: &str) -> Result<String> {
    let title = title_for(file_name);
    if seen.insert(title.to_lowercase()) {
        return Ok(title.to_string());
    }
    tracing::warn!(file = file_name, title, "title already taken, using full file name");
    if seen.insert(file_name.to_lowercase()) {
        return Ok(file_name.to_string());
    }
    Err(Error::InvalidArgument("duplicate document title"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_txt_suffix() {
        assert_eq!(title_for("essay.txt"), "essay");
        assert_eq!(title_for("notes.md"), "notes.md");
        assert_eq!(title_for("a.txt.txt"), "a.txt");
    }

    #[test]
    fn colliding_titles_fall_back_to_file_name() {
        let mut seen = HashSet::new();
        assert_eq!(unique_title(&mut seen, "notes").unwrap(), "notes");
        assert_eq!(unique_title(&mut seen, "notes.txt").unwrap(), "notes.txt");
        assert_eq!(unique_title(&mut seen, "Essay.txt").unwrap(), "Essay");
        assert_eq!(unique_title(&mut seen, "essay.txt").unwrap(), "essay.txt");
        assert!(matches!(unique_title(&mut seen, "ESSAY.TXT"), Err(Error::InvalidArgument(_))));
    }
}
