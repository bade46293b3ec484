//! Filtering and aggregation over the article corpus.
//!
//! Everything here is a pure function of the filtered rows: the web layer
//! calls [`DashboardSnapshot::compute`] on every filter change and renders
//! the result.

pub mod cooccurrence;
pub mod counts;
pub mod dashboard;
pub mod filter;
pub mod hierarchy;
pub mod kpi;
pub mod timeline;
pub mod wordcloud;

#[cfg(test)]
pub(crate) mod fixtures;

pub use {
    cooccurrence::{CooccurrenceMatrix, cooccurrence},
    counts::{LabelCount, explode, mode, top_n, value_counts},
    dashboard::{DashboardSnapshot, FilterOptions},
    filter::{FilterParams, filter, filter_rows},
    hierarchy::{HierarchyCount, hierarchy, hierarchy_pairs},
    kpi::{Kpis, format_thousands, kpis},
    timeline::{DailyCount, daily_counts},
    wordcloud::{CloudWord, word_cloud},
};
