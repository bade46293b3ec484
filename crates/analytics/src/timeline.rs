use std::collections::BTreeMap;

use {chrono::NaiveDate, mediascope_corpus::Article, serde::Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Articles per calendar day, ascending. Days without articles are absent.
pub fn daily_counts(rows: &[&Article]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for article in rows {
        *per_day.entry(article.date).or_default() += 1;
    }
    per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
