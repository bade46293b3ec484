//! Summary counters shown above the charts.

use {
    mediascope_corpus::{Article, EntityKind},
    serde::Serialize,
};

use crate::{
    counts::{explode, mode},
    filter::FilterParams,
};

/// Placeholder when a counter has no value for the current filter.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_articles: usize,
    /// `total_articles` with a space as thousands separator.
    pub total_display: String,
    /// Most frequent keyword that is not already selected in the filter.
    pub top_keyword: String,
    pub top_person: String,
    pub top_organization: String,
}

pub fn kpis(rows: &[&Article], params: &FilterParams) -> Kpis {
    let top_keyword = mode(
        explode(rows, EntityKind::Keyword).filter(|kw| !params.keywords.iter().any(|s| s == kw)),
    );
    let top_person = mode(explode(rows, EntityKind::Person));
    let top_organization = mode(explode(rows, EntityKind::Organization));

    let or_na = |value: Option<&str>| value.unwrap_or(NOT_AVAILABLE).to_string();
    Kpis {
        total_articles: rows.len(),
        total_display: format_thousands(rows.len()),
        top_keyword: or_na(top_keyword),
        top_person: or_na(top_person),
        top_organization: or_na(top_organization),
    }
}

/// `30000` → `30 000`.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::fixtures::article, rstest::rstest};

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1 000")]
    #[case(30000, "30 000")]
    #[case(1234567, "1 234 567")]
    fn thousands(#[case] n: usize, #[case] expected: &str) {
        assert_eq!(format_thousands(n), expected);
    }

    #[test]
    fn counters_for_rows() {
        let a = article("2023-01-01", &["Santé", "Sport"], &[], &["OMS"], &["Macron"]);
        let b = article("2023-01-02", &["Santé"], &[], &["OMS", "ONU"], &["Biden"]);
        let k = kpis(&[&a, &b], &FilterParams::default());

        assert_eq!(k.total_articles, 2);
        assert_eq!(k.top_keyword, "Santé");
        assert_eq!(k.top_organization, "OMS");
        // Tie between Biden and Macron goes to the alphabetically first.
        assert_eq!(k.top_person, "Biden");
    }

    #[test]
    fn selected_keywords_are_excluded() {
        let a = article("2023-01-01", &["Santé", "Sport"], &[], &[], &[]);
        let b = article("2023-01-02", &["Santé"], &[], &[], &[]);
        let params = FilterParams {
            keywords: vec!["Santé".into()],
            ..FilterParams::default()
        };
        assert_eq!(kpis(&[&a, &b], &params).top_keyword, "Sport");
    }

    #[test]
    fn empty_rows_show_placeholders() {
        let k = kpis(&[], &FilterParams::default());
        assert_eq!(k.total_display, "0");
        assert_eq!(k.top_keyword, NOT_AVAILABLE);
        assert_eq!(k.top_person, NOT_AVAILABLE);
        assert_eq!(k.top_organization, NOT_AVAILABLE);
    }
}
