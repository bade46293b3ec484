//! Pairwise co-occurrence counts for the heatmap.

use std::collections::HashMap;

use {
    mediascope_corpus::{Article, EntityKind},
    serde::Serialize,
};

use crate::counts::top_n;

/// Square, symmetric count matrix over the most frequent labels of one
/// entity column. `counts[i][j]` is the number of articles carrying both
/// `labels[i]` and `labels[j]`; the diagonal is always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CooccurrenceMatrix {
    pub labels: Vec<String>,
    pub counts: Vec<Vec<u32>>,
}

impl CooccurrenceMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, a: &str, b: &str) -> Option<u32> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.counts[i][j])
    }
}

/// Co-occurrence matrix restricted to the `top` most frequent labels of `kind`.
pub fn cooccurrence(rows: &[&Article], kind: EntityKind, top: usize) -> CooccurrenceMatrix {
    let labels: Vec<String> = top_n(rows, kind, top)
        .into_iter()
        .map(|c| c.label)
        .collect();
    let index: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let mut counts = vec![vec![0u32; labels.len()]; labels.len()];
    let mut present = Vec::new();
    for article in rows {
        present.clear();
        present.extend(
            article
                .labels(kind)
                .iter()
                .filter_map(|label| index.get(label).copied()),
        );
        for (pos, &i) in present.iter().enumerate() {
            for &j in &present[pos + 1..] {
                counts[i][j] += 1;
                counts[j][i] += 1;
            }
        }
    }

    CooccurrenceMatrix { labels, counts }
}
