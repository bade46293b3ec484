//! One filter state in, every aggregate out.

use std::time::Instant;

use {
    chrono::NaiveDate,
    mediascope_config::Limits,
    mediascope_corpus::{Corpus, EntityKind},
    serde::Serialize,
    tracing::debug,
};

use crate::{
    cooccurrence::{CooccurrenceMatrix, cooccurrence},
    counts::{LabelCount, top_n},
    filter::{FilterParams, filter},
    hierarchy::{HierarchyCount, hierarchy},
    kpi::{Kpis, kpis},
    timeline::{DailyCount, daily_counts},
    wordcloud::{CloudWord, word_cloud},
};

/// Values offered by the filter controls, computed once over the full corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Most frequent keywords, most frequent first.
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterOptions {
    pub fn from_corpus(corpus: &Corpus, limits: &Limits) -> Self {
        let rows: Vec<_> = corpus.articles().iter().collect();
        let labels = |kind, n| {
            top_n(&rows, kind, n)
                .into_iter()
                .map(|c| c.label)
                .collect::<Vec<_>>()
        };
        let bounds = corpus.date_bounds();
        Self {
            min_date: bounds.map(|(min, _)| min),
            max_date: bounds.map(|(_, max)| max),
            keywords: labels(EntityKind::Keyword, limits.keyword_options),
            locations: labels(EntityKind::Location, limits.location_options),
        }
    }
}

/// Every aggregate the dashboard shows for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub kpis: Kpis,
    pub timeline: Vec<DailyCount>,
    pub top_persons: Vec<LabelCount>,
    pub top_locations: Vec<LabelCount>,
    pub word_cloud: Vec<CloudWord>,
    pub hierarchy: Vec<HierarchyCount>,
    pub cooccurrence: CooccurrenceMatrix,
}

impl DashboardSnapshot {
    pub fn compute(corpus: &Corpus, params: &FilterParams, limits: &Limits) -> Self {
        let started = Instant::now();
        let rows = filter(corpus, params);

        let snapshot = Self {
            kpis: kpis(&rows, params),
            timeline: daily_counts(&rows),
            top_persons: top_n(&rows, EntityKind::Person, limits.top_persons),
            top_locations: top_n(&rows, EntityKind::Location, limits.top_locations),
            word_cloud: word_cloud(&rows, limits.word_cloud_words, limits.word_cloud_seed),
            hierarchy: hierarchy(
                &rows,
                limits.hierarchy_pair_cap,
                limits.hierarchy_top_locations,
            ),
            cooccurrence: cooccurrence(&rows, EntityKind::Keyword, limits.heatmap_labels),
        };

        debug!(
            rows = rows.len(),
            total = corpus.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dashboard recomputed"
        );
        snapshot
    }
}
