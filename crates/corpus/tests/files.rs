#![allow(clippy::unwrap_used, clippy::expect_used)]

use {
    mediascope_corpus::{
        CorpusError, ingest::preprocess, load_corpus, synthetic::generate, write_csv,
    },
    serde_json::json,
    tempfile::TempDir,
};

#[test]
fn synthetic_corpus_survives_csv() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("processed").join("clean_data.csv");
    let articles = generate(200, 42);

    write_csv(&path, &articles).unwrap();
    let (corpus, report) = load_corpus(&path).unwrap();

    assert_eq!(report.rows_loaded, 200);
    assert_eq!(report.rows_skipped, 0);
    assert_eq!(corpus.articles(), articles.as_slice());
}

#[test]
fn preprocess_merges_export_layouts() {
    let tmp = TempDir::new().unwrap();
    let raw = tmp.path().join("raw");
    std::fs::create_dir_all(&raw).unwrap();

    std::fs::write(
        raw.join("a.json"),
        json!([
            {"date": "2023-01-02", "title": "Un", "kws": ["Santé"], "loc": ["Paris"]},
            {"title": "sans date"},
        ])
        .to_string(),
    )
    .unwrap();
    std::fs::write(
        raw.join("b.json"),
        json!({"data": {"all": [
            {"date_published": "2023-02-03T09:00:00Z", "title": "Deux", "org": "['ONU', 'UE']"},
        ]}})
        .to_string(),
    )
    .unwrap();
    std::fs::write(raw.join("c.json"), "{ not json").unwrap();
    std::fs::write(raw.join("notes.txt"), "ignored").unwrap();

    let output = tmp.path().join("processed").join("clean_data.csv");
    let report = preprocess(&raw, &output).unwrap();

    assert_eq!(report.files_read, 2);
    assert_eq!(report.files_failed, 1);
    assert_eq!(report.articles_found, 3);
    assert_eq!(report.articles_dropped, 1);
    assert_eq!(report.articles_written, 2);

    let (corpus, _) = load_corpus(&output).unwrap();
    let titles: Vec<&str> = corpus.articles().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Un", "Deux"]);
    assert_eq!(corpus.articles()[1].organizations.as_slice(), ["ONU", "UE"]);
}

#[test]
fn preprocess_without_articles_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("empty.json"), "[]").unwrap();

    let err = preprocess(tmp.path(), &tmp.path().join("out.csv")).unwrap_err();
    assert!(matches!(err, CorpusError::NoArticles(_)));
}

#[test]
fn preprocess_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let err = preprocess(&tmp.path().join("nope"), &tmp.path().join("out.csv")).unwrap_err();
    assert!(matches!(err, CorpusError::NotFound(_)));
}
