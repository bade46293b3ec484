//! Article records and the in-memory corpus.

use std::{collections::HashSet, fmt};

use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Ordered set of short text labels attached to an article.
///
/// Never null: a missing or malformed cell is the empty set. Duplicates keep
/// their first position, and blank labels are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Into::into).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// At most the first `n` labels, in insertion order.
    pub fn head(&self, n: usize) -> &[String] {
        &self.0[..n.min(self.0.len())]
    }

    /// True when at least one label is in `wanted`.
    pub fn intersects(&self, wanted: &HashSet<&str>) -> bool {
        self.iter().any(|l| wanted.contains(l))
    }
}

impl FromIterator<String> for Labels {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut out: Vec<String> = Vec::new();
        for label in iter {
            if label.trim().is_empty() || out.contains(&label) {
                continue;
            }
            out.push(label);
        }
        Self(out)
    }
}

impl<'a> IntoIterator for &'a Labels {
    type IntoIter = std::slice::Iter<'a, String>;
    type Item = &'a String;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The four list-valued entity columns of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Keyword,
    Location,
    Organization,
    Person,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [
        Self::Keyword,
        Self::Location,
        Self::Organization,
        Self::Person,
    ];

    /// Column name in the clean CSV file.
    pub fn column(self) -> &'static str {
        match self {
            Self::Keyword => "kws",
            Self::Location => "loc",
            Self::Organization => "org",
            Self::Person => "per",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub url: Option<String>,
    pub keywords: Labels,
    pub locations: Labels,
    pub organizations: Labels,
    pub persons: Labels,
}

impl Article {
    pub fn labels(&self, kind: EntityKind) -> &Labels {
        match kind {
            EntityKind::Keyword => &self.keywords,
            EntityKind::Location => &self.locations,
            EntityKind::Organization => &self.organizations,
            EntityKind::Person => &self.persons,
        }
    }
}

/// Read-only table of articles, loaded once and shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    articles: Vec<Article>,
}

impl Corpus {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Earliest and latest article dates, `None` for an empty corpus.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.articles.iter().map(|a| a.date).min()?;
        let max = self.articles.iter().map(|a| a.date).max()?;
        Some((min, max))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: &str) -> Article {
        Article {
            date: date.parse().unwrap(),
            title: String::new(),
            content: String::new(),
            url: None,
            keywords: Labels::default(),
            locations: Labels::default(),
            organizations: Labels::default(),
            persons: Labels::default(),
        }
    }

    #[test]
    fn labels_dedup_keeps_first_position() {
        let labels = Labels::new(["UE", "ONU", "UE", "OTAN"]);
        assert_eq!(labels.as_slice(), ["UE", "ONU", "OTAN"]);
    }

    #[test]
    fn labels_drop_blank_entries() {
        let labels = Labels::new(["", "  ", "Paris"]);
        assert_eq!(labels.as_slice(), ["Paris"]);
    }

    #[test]
    fn head_is_clamped() {
        let labels = Labels::new(["a", "b", "c"]);
        assert_eq!(labels.head(2), ["a", "b"]);
        assert_eq!(labels.head(10).len(), 3);
        assert!(Labels::default().head(2).is_empty());
    }

    #[test]
    fn intersects_is_any_match() {
        let labels = Labels::new(["Paris", "Berlin"]);
        let wanted: HashSet<&str> = ["Berlin", "Dakar"].into_iter().collect();
        assert!(labels.intersects(&wanted));
        let wanted: HashSet<&str> = ["Dakar"].into_iter().collect();
        assert!(!labels.intersects(&wanted));
    }

    #[test]
    fn date_bounds() {
        assert!(Corpus::default().date_bounds().is_none());
        let corpus = Corpus::new(vec![
            article("2023-03-01"),
            article("2022-01-05"),
            article("2023-12-31"),
        ]);
        let (min, max) = corpus.date_bounds().unwrap();
        assert_eq!(min.to_string(), "2022-01-05");
        assert_eq!(max.to_string(), "2023-12-31");
    }

    #[test]
    fn entity_columns() {
        let names: Vec<&str> = EntityKind::ALL.iter().map(|k| k.column()).collect();
        assert_eq!(names, ["kws", "loc", "org", "per"]);
    }
}
