//! Clean CSV table: reading into a [`Corpus`] and writing articles back out.
//!
//! Column layout: `date,title,kws,loc,org,per,url,content`. Only `date` is
//! required when reading; extra columns are ignored.

use std::{fs::File, io, path::Path};

use {
    chrono::{DateTime, NaiveDate, NaiveDateTime},
    serde::{Deserialize, Serialize},
    tracing::{debug, info, warn},
};

use crate::{
    error::{CorpusError, Result},
    literal::{format_list_literal, parse_list_literal},
    model::{Article, Corpus},
};

const HEADER: [&str; 8] = ["date", "title", "kws", "loc", "org", "per", "url", "content"];

/// Outcome of reading a CSV table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_loaded: usize,
    /// Rows dropped because the date was unparsable or the row was malformed.
    pub rows_skipped: usize,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    kws: Option<String>,
    #[serde(default)]
    loc: Option<String>,
    #[serde(default)]
    org: Option<String>,
    #[serde(default)]
    per: Option<String>,
}

impl CsvRow {
    fn into_article(self) -> Option<Article> {
        let labels = |cell: Option<String>| {
            cell.as_deref()
                .map(parse_list_literal)
                .unwrap_or_default()
        };
        Some(Article {
            date: parse_date(&self.date)?,
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            url: self.url.filter(|u| !u.trim().is_empty()),
            keywords: labels(self.kws),
            locations: labels(self.loc),
            organizations: labels(self.org),
            persons: labels(self.per),
        })
    }
}

#[derive(Debug, Serialize)]
struct CsvOutRow<'a> {
    date: String,
    title: &'a str,
    kws: String,
    loc: String,
    org: String,
    per: String,
    url: &'a str,
    content: &'a str,
}

impl<'a> From<&'a Article> for CsvOutRow<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            date: article.date.format("%Y-%m-%d").to_string(),
            title: &article.title,
            kws: format_list_literal(&article.keywords),
            loc: format_list_literal(&article.locations),
            org: format_list_literal(&article.organizations),
            per: format_list_literal(&article.persons),
            url: article.url.as_deref().unwrap_or(""),
            content: &article.content,
        }
    }
}

/// Parse the calendar date out of the timestamp shapes found in exports:
/// plain dates, `YYYY-MM-DD HH:MM:SS` with or without an offset, and RFC 3339.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Load the clean CSV at `path`.
pub fn load_corpus(path: &Path) -> Result<(Corpus, LoadReport)> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CorpusError::NotFound(path.to_path_buf()),
        _ => CorpusError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let (corpus, report) = read_corpus(file, path)?;
    info!(
        path = %path.display(),
        articles = report.rows_loaded,
        skipped = report.rows_skipped,
        "corpus loaded"
    );
    Ok((corpus, report))
}

/// Read a CSV table from any reader. `origin` only labels errors and logs.
pub fn read_corpus<R: io::Read>(reader: R, origin: &Path) -> Result<(Corpus, LoadReport)> {
    let csv_err = |source: csv::Error| CorpusError::Csv {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut articles = Vec::new();
    let mut report = LoadReport::default();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        match row {
            Ok(row) => match row.into_article() {
                Some(article) => articles.push(article),
                None => {
                    debug!(line, "skipping row with unparsable date");
                    report.rows_skipped += 1;
                },
            },
            Err(e) if e.is_io_error() => return Err(csv_err(e)),
            Err(e) => {
                warn!(line, error = %e, "skipping malformed row");
                report.rows_skipped += 1;
            },
        }
    }

    if report.rows_skipped > 0 {
        warn!(
            origin = %origin.display(),
            skipped = report.rows_skipped,
            "some rows could not be loaded"
        );
    }
    report.rows_loaded = articles.len();
    Ok((Corpus::new(articles), report))
}

/// Write articles as a clean CSV table, creating parent directories.
pub fn write_csv(path: &Path, articles: &[Article]) -> Result<()> {
    let io_err = |source: io::Error| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source: csv::Error| CorpusError::Csv {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(HEADER).map_err(csv_err)?;
    for article in articles {
        writer.serialize(CsvOutRow::from(article)).map_err(csv_err)?;
    }
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), rows = articles.len(), "wrote corpus table");
    Ok(())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn memory() -> &'static Path {
        Path::new("<memory>")
    }

    #[rstest]
    #[case("2023-04-05", "2023-04-05")]
    #[case("2023-04-05 00:00:00", "2023-04-05")]
    #[case("2023-04-05 23:10:00+02:00", "2023-04-05")]
    #[case("2023-04-05T08:30:00Z", "2023-04-05")]
    #[case("2023-04-05T08:30:00.250+01:00", "2023-04-05")]
    #[case("2023-04-05T08:30:00", "2023-04-05")]
    #[case("  2023-04-05 ", "2023-04-05")]
    fn parses_export_dates(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(parse_date(raw).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2023-13-01")]
    #[case("05/04/2023")]
    fn rejects_garbage_dates(#[case] raw: &str) {
        assert!(parse_date(raw).is_none());
    }

    #[test]
    fn reads_rows_and_parses_lists() {
        let csv = "date,title,kws,loc,org,per,content\n\
                   2023-01-02,Un titre,\"['Santé', 'Sport']\",['Paris'],\"['ONU', 'UE']\",[],Texte\n";
        let (corpus, report) = read_corpus(csv.as_bytes(), memory()).unwrap();
        assert_eq!(report, LoadReport {
            rows_loaded: 1,
            rows_skipped: 0
        });
        let article = &corpus.articles()[0];
        assert_eq!(article.title, "Un titre");
        assert_eq!(article.keywords.as_slice(), ["Santé", "Sport"]);
        assert_eq!(article.locations.as_slice(), ["Paris"]);
        assert_eq!(article.organizations.as_slice(), ["ONU", "UE"]);
        assert!(article.persons.is_empty());
        assert!(article.url.is_none());
    }

    #[test]
    fn missing_content_and_bad_cells_become_empty() {
        let csv = "date,title,kws,loc,org,per\n2023-01-02,,nan,,['broken,[]\n";
        let (corpus, _) = read_corpus(csv.as_bytes(), memory()).unwrap();
        let article = &corpus.articles()[0];
        assert_eq!(article.content, "");
        assert_eq!(article.title, "");
        assert!(article.keywords.is_empty());
        assert!(article.locations.is_empty());
        assert!(article.organizations.is_empty());
    }

    #[test]
    fn rows_with_bad_dates_are_skipped() {
        let csv = "date,title\n2023-01-02,ok\nnot a date,bad\n2023-01-03,ok\n";
        let (corpus, report) = read_corpus(csv.as_bytes(), memory()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(report.rows_skipped, 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_corpus(Path::new("/nonexistent/clean_data.csv")).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound(_)));
    }
}
