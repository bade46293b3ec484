//! Explode-and-count over list-valued columns.

use std::collections::HashMap;

use {
    mediascope_corpus::{Article, EntityKind},
    serde::Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// One item per label occurrence across `rows`.
pub fn explode<'a>(rows: &[&'a Article], kind: EntityKind) -> impl Iterator<Item = &'a str> {
    rows.iter().flat_map(move |a| a.labels(kind).iter())
}

/// Occurrences per label, most frequent first. Ties keep first-appearance order.
pub fn value_counts(rows: &[&Article], kind: EntityKind) -> Vec<LabelCount> {
    count_labels(explode(rows, kind))
}

/// The `n` most frequent labels.
pub fn top_n(rows: &[&Article], kind: EntityKind, n: usize) -> Vec<LabelCount> {
    let mut counts = value_counts(rows, kind);
    counts.truncate(n);
    counts
}

pub(crate) fn count_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<LabelCount> {
    // label -> (count, first position)
    let mut seen: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, label) in labels.into_iter().enumerate() {
        seen.entry(label).or_insert((0, position)).0 += 1;
    }

    let mut ordered: Vec<(&str, usize, usize)> = seen
        .into_iter()
        .map(|(label, (count, first))| (label, count, first))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ordered
        .into_iter()
        .map(|(label, count, _)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Most frequent label; ties go to the lexicographically smallest one.
pub fn mode<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(label, _)| label)
}
