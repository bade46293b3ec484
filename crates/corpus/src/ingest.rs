//! Raw JSON exports → clean CSV table.
//!
//! Exports come in several envelopes depending on the source: a bare list of
//! articles, or an object holding the list under `data.all`, `data`,
//! `data-all` or `items`.

use std::path::{Path, PathBuf};

use {
    serde_json::Value,
    tracing::{debug, info, warn},
    walkdir::WalkDir,
};

use crate::{
    error::{CorpusError, Result},
    literal::parse_list_literal,
    model::{Article, Labels},
    table::{parse_date, write_csv},
};

/// Date fields tried in order; the first non-null one wins.
pub const DATE_FIELDS: [&str; 4] = ["date_published", "date", "created_at", "published_at"];

/// Summary of a preprocessing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub files_read: usize,
    pub files_failed: usize,
    /// Articles found in the exports, before date cleaning.
    pub articles_found: usize,
    /// Articles dropped for a missing or unparsable date.
    pub articles_dropped: usize,
    pub articles_written: usize,
}

/// Locate the article list inside one export file.
pub fn extract_articles(content: &Value) -> &[Value] {
    match content {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => {
            if let Some(data) = map.get("data") {
                if let Some(Value::Array(all)) = data.get("all") {
                    return all.as_slice();
                }
                if let Value::Array(items) = data {
                    return items.as_slice();
                }
            }
            for key in ["data-all", "items"] {
                if let Some(Value::Array(items)) = map.get(key) {
                    return items.as_slice();
                }
            }
            &[]
        },
        _ => &[],
    }
}

/// Convert one raw article object. `None` when it is not an object or has no
/// usable date.
pub fn article_from_raw(raw: &Value) -> Option<Article> {
    let obj = raw.as_object()?;
    let date = DATE_FIELDS
        .iter()
        .find_map(|field| obj.get(*field).filter(|v| !v.is_null()))?
        .as_str()
        .and_then(parse_date)?;

    let text = |field: &str| {
        obj.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(Article {
        date,
        title: text("title"),
        content: text("content"),
        url: obj
            .get("url")
            .and_then(Value::as_str)
            .filter(|u| !u.trim().is_empty())
            .map(str::to_string),
        keywords: labels_from_value(obj.get("kws")),
        locations: labels_from_value(obj.get("loc")),
        organizations: labels_from_value(obj.get("org")),
        persons: labels_from_value(obj.get("per")),
    })
}

/// Entity lists arrive either as JSON arrays or as already-printed literals.
fn labels_from_value(value: Option<&Value>) -> Labels {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(cell)) => parse_list_literal(cell),
        _ => Labels::default(),
    }
}

/// `*.json` files directly under `dir`, sorted for a stable output order.
fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .flatten()
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    files
}

fn read_export(path: &Path) -> Result<Value, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Read every export in `raw_dir`, clean the dates and write the CSV table to
/// `output`. Unreadable files are skipped.
pub fn preprocess(raw_dir: &Path, output: &Path) -> Result<IngestReport> {
    if !raw_dir.is_dir() {
        return Err(CorpusError::NotFound(raw_dir.to_path_buf()));
    }

    let files = json_files(raw_dir);
    info!(dir = %raw_dir.display(), files = files.len(), "scanning raw exports");

    let mut report = IngestReport::default();
    let mut articles = Vec::new();

    for path in &files {
        let content = match read_export(path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable export");
                report.files_failed += 1;
                continue;
            },
        };
        report.files_read += 1;

        let raw = extract_articles(&content);
        if raw.is_empty() {
            warn!(path = %path.display(), "no articles found (empty or unknown layout)");
            continue;
        }
        debug!(path = %path.display(), articles = raw.len(), "export read");

        report.articles_found += raw.len();
        for item in raw {
            match article_from_raw(item) {
                Some(article) => articles.push(article),
                None => report.articles_dropped += 1,
            }
        }
    }

    if articles.is_empty() {
        return Err(CorpusError::NoArticles(raw_dir.to_path_buf()));
    }

    write_csv(output, &articles)?;
    report.articles_written = articles.len();
    info!(
        output = %output.display(),
        written = report.articles_written,
        dropped = report.articles_dropped,
        failed_files = report.files_failed,
        "preprocessing complete"
    );
    Ok(report)
}
