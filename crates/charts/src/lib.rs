//! Plotly figure JSON for every dashboard panel.
//!
//! The server never renders charts itself: each aggregate from
//! `mediascope-analytics` becomes a [`Figure`] that the page hands to
//! plotly.js unchanged.

pub mod figure;
pub mod panels;

pub use {
    figure::Figure,
    panels::{
        cooccurrence_heatmap, sunburst, timeline, top_locations_bar, top_persons_bar, word_cloud,
    },
};

use {mediascope_analytics::DashboardSnapshot, serde::Serialize};

/// All panels of one dashboard refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFigures {
    pub timeline: Figure,
    pub word_cloud: Figure,
    pub top_persons: Figure,
    pub top_locations: Figure,
    pub sunburst: Figure,
    pub heatmap: Figure,
}

impl DashboardFigures {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self {
            timeline: timeline(&snapshot.timeline),
            word_cloud: word_cloud(&snapshot.word_cloud),
            top_persons: top_persons_bar(&snapshot.top_persons),
            top_locations: top_locations_bar(&snapshot.top_locations),
            sunburst: sunburst(&snapshot.hierarchy),
            heatmap: cooccurrence_heatmap(&snapshot.cooccurrence),
        }
    }
}
