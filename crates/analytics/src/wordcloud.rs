//! Keyword cloud layout: font size from frequency, scattered positions.

use {
    mediascope_corpus::{Article, EntityKind},
    rand::{Rng, SeedableRng, rngs::StdRng},
    serde::Serialize,
};

use crate::counts::top_n;

pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 60.0;
/// Positions are drawn in `[0, CANVAS_EXTENT)` on both axes.
pub const CANVAS_EXTENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub label: String,
    pub count: usize,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// Top `words` keywords with their font size and position. The same seed
/// places the same number of words at the same spots.
pub fn word_cloud(rows: &[&Article], words: usize, seed: u64) -> Vec<CloudWord> {
    let counts = top_n(rows, EntityKind::Keyword, words);
    let Some(max) = counts.first().map(|c| c.count) else {
        return Vec::new();
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let xs: Vec<f64> = (0..counts.len())
        .map(|_| rng.random_range(0.0..CANVAS_EXTENT))
        .collect();
    let ys: Vec<f64> = (0..counts.len())
        .map(|_| rng.random_range(0.0..CANVAS_EXTENT))
        .collect();

    counts
        .into_iter()
        .zip(xs.into_iter().zip(ys))
        .map(|(c, (x, y))| CloudWord {
            size: font_size(c.count, max),
            label: c.label,
            count: c.count,
            x,
            y,
        })
        .collect()
}

fn font_size(count: usize, max: usize) -> f64 {
    MIN_FONT_SIZE + (count as f64 / max as f64) * (MAX_FONT_SIZE - MIN_FONT_SIZE)
}
