//! Cross-filtering: date range, keywords, locations.
//!
//! OR within a category (an article matches when it carries at least one of
//! the selected labels), AND across categories. An empty selection does not
//! constrain anything.

use std::collections::HashSet;

use {
    chrono::NaiveDate,
    mediascope_corpus::{Article, Corpus},
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterParams {
    /// Inclusive date range, only when both ends are set.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.date_range().is_none() && self.keywords.is_empty() && self.locations.is_empty()
    }
}

/// Rows of `corpus` matching `params`, in corpus order.
pub fn filter<'a>(corpus: &'a Corpus, params: &FilterParams) -> Vec<&'a Article> {
    filter_rows(corpus.articles(), params)
}

/// Same as [`filter`] over any article sequence, so filters can be chained.
pub fn filter_rows<'a, I>(rows: I, params: &FilterParams) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let range = params.date_range();
    let keywords: HashSet<&str> = params.keywords.iter().map(String::as_str).collect();
    let locations: HashSet<&str> = params.locations.iter().map(String::as_str).collect();

    rows.into_iter()
        .filter(|a| range.is_none_or(|(start, end)| a.date >= start && a.date <= end))
        .filter(|a| keywords.is_empty() || a.keywords.intersects(&keywords))
        .filter(|a| locations.is_empty() || a.locations.intersects(&locations))
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::fixtures::article};

    fn corpus() -> Corpus {
        Corpus::new(vec![
            article("2023-01-01", &["Santé"], &["Paris"], &[], &[]),
            article("2023-01-15", &["Sport", "Santé"], &["Berlin"], &[], &[]),
            article("2023-02-01", &["Culture"], &["Paris", "Dakar"], &[], &[]),
            article("2023-03-01", &[], &[], &[], &[]),
        ])
    }

    fn params(start: Option<&str>, end: Option<&str>, kws: &[&str], locs: &[&str]) -> FilterParams {
        FilterParams {
            start: start.map(|s| s.parse().unwrap()),
            end: end.map(|s| s.parse().unwrap()),
            keywords: kws.iter().map(|s| s.to_string()).collect(),
            locations: locs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn unconstrained_keeps_everything() {
        let corpus = corpus();
        let p = FilterParams::default();
        assert!(p.is_unconstrained());
        assert_eq!(filter(&corpus, &p).len(), 4);
    }

    #[test]
    fn date_range_is_inclusive() {
        let corpus = corpus();
        let rows = filter(&corpus, &params(Some("2023-01-15"), Some("2023-02-01"), &[], &[]));
        let dates: Vec<String> = rows.iter().map(|a| a.date.to_string()).collect();
        assert_eq!(dates, ["2023-01-15", "2023-02-01"]);
    }

    #[test]
    fn half_open_range_is_ignored() {
        let corpus = corpus();
        assert_eq!(filter(&corpus, &params(Some("2023-02-01"), None, &[], &[])).len(), 4);
        assert_eq!(filter(&corpus, &params(None, Some("2023-01-01"), &[], &[])).len(), 4);
    }

    #[test]
    fn inverted_range_is_empty() {
        let corpus = corpus();
        let rows = filter(&corpus, &params(Some("2023-03-01"), Some("2023-01-01"), &[], &[]));
        assert!(rows.is_empty());
    }

    #[test]
    fn keywords_match_any_selected() {
        let corpus = corpus();
        let rows = filter(&corpus, &params(None, None, &["Santé", "Culture"], &[]));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn not_subset_semantics() {
        // The second article has Sport and Santé; selecting Santé and Politique
        // still matches it even though Politique is absent.
        let corpus = corpus();
        let rows = filter(&corpus, &params(None, None, &["Santé", "Politique"], &[]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn categories_combine_with_and() {
        let corpus = corpus();
        let rows = filter(&corpus, &params(None, None, &["Santé"], &["Paris"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date.to_string(), "2023-01-01");
    }

    #[test]
    fn unknown_label_yields_empty() {
        let corpus = corpus();
        assert!(filter(&corpus, &params(None, None, &["Inconnu"], &[])).is_empty());
    }

    #[test]
    fn chaining_filter_rows() {
        let corpus = corpus();
        let by_place = filter(&corpus, &params(None, None, &[], &["Paris"]));
        let narrowed = filter_rows(by_place.iter().copied(), &params(None, None, &["Culture"], &[]));
        assert_eq!(narrowed.len(), 1);
    }
}
