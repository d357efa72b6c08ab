use lexsim_core::{analyze, load_corpus, Error, IoPolicy, LoadOptions, Threshold};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_files_sorted_by_title() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("zeta.txt"), "Ships and storms.").unwrap();
    fs::write(dir.path().join("alpha.txt"), "Whales whales krill").unwrap();
    fs::write(dir.path().join("notes"), "plain name").unwrap();
    fs::write(dir.path().join("StopWords.txt"), "the a an").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/inner.txt"), "ignored").unwrap();

    let corpus = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    let titles: Vec<&str> = corpus.documents.iter().map(|d| d.title()).collect();
    assert_eq!(titles, vec!["alpha", "notes", "zeta"]);
    assert!(corpus.failed.is_empty());
    assert_eq!(corpus.get("alpha").unwrap().frequency("whales"), 2);
}

#[test]
fn lenient_policy_records_unreadable_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "apple pear").unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let corpus = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.failed, vec!["bad".to_string()]);
    assert!(corpus.get("bad").unwrap().is_empty());
}

#[test]
fn strict_policy_fails_fast() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let options = LoadOptions { on_io_error: IoPolicy::Strict };
    let err = load_corpus(dir.path(), &options).unwrap_err();
    assert!(matches!(err, Error::Io { ref title, .. } if title == "bad"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_corpus(dir.path().join("absent"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn colliding_titles_keep_both_documents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes"), "whales krill ocean").unwrap();
    fs::write(dir.path().join("notes.txt"), "whales krill ocean").unwrap();

    let corpus = load_corpus(dir.path(), &LoadOptions::default()).unwrap();
    let titles: Vec<&str> = corpus.documents.iter().map(|d| d.title()).collect();
    assert_eq!(titles, vec!["notes", "notes.txt"]);

    let report = analyze(&corpus.documents, Threshold::new(90).unwrap());
    assert_eq!(report.rows[0].similarities.len(), 1);
    assert_eq!(report.matches.len(), 1);
}

#[cfg(unix)]
#[test]
fn follows_symlinked_files() {
    use std::os::unix::fs::symlink;

    let root = tempdir().unwrap();
    let corpus_dir = root.path().join("corpus");
    fs::create_dir(&corpus_dir).unwrap();
    fs::write(root.path().join("real.txt"), "lighthouse keeper").unwrap();
    fs::write(corpus_dir.join("plain.txt"), "harbor pilot").unwrap();
    symlink(root.path().join("real.txt"), corpus_dir.join("linked.txt")).unwrap();
    symlink(root.path().join("gone.txt"), corpus_dir.join("dangling.txt")).unwrap();

    let corpus = load_corpus(&corpus_dir, &LoadOptions::default()).unwrap();
    let titles: Vec<&str> = corpus.documents.iter().map(|d| d.title()).collect();
    assert_eq!(titles, vec!["dangling", "linked", "plain"]);
    assert_eq!(corpus.get("linked").unwrap().frequency("lighthouse"), 1);
    assert_eq!(corpus.failed, vec!["dangling".to_string()]);

    let strict = LoadOptions { on_io_error: IoPolicy::Strict };
    assert!(matches!(load_corpus(&corpus_dir, &strict), Err(Error::Io { .. })));
}
