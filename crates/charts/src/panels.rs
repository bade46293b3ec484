//! One figure per dashboard panel.

use std::collections::BTreeMap;

use {
    mediascope_analytics::{
        CloudWord, CooccurrenceMatrix, DailyCount, HierarchyCount, LabelCount,
        hierarchy::ROOT_LABEL,
    },
    serde_json::json,
};

use crate::figure::{ACCENT, Figure, themed};

pub const TIMELINE_TITLE: &str = "Évolution du Volume d'Articles";
pub const TOP_PERSONS_TITLE: &str = "Top 20 Personnalités Citées";
pub const TOP_LOCATIONS_TITLE: &str = "Top 15 Lieux Mentionnés";
pub const WORD_CLOUD_TITLE: &str = "Nuage de Mots-clés";
pub const SUNBURST_TITLE: &str = "Hiérarchie Lieux - Organisations";
pub const HEATMAP_TITLE: &str = "Matrice de Co-occurrence des Mots-clés";

/// Daily article volume as an area chart with a range selector and slider.
pub fn timeline(days: &[DailyCount]) -> Figure {
    if days.is_empty() {
        return Figure::empty();
    }

    let trace = json!({
        "type": "scatter",
        "mode": "lines",
        "fill": "tozeroy",
        "x": days.iter().map(|d| d.date.to_string()).collect::<Vec<_>>(),
        "y": days.iter().map(|d| d.count).collect::<Vec<_>>(),
        "line": { "color": ACCENT },
        "fillcolor": "rgba(0, 188, 140, 0.3)",
        "hovertemplate": "%{x}<br>%{y} articles<extra></extra>",
    });
    let layout = themed(
        Some(TIMELINE_TITLE),
        json!({
            "margin": { "l": 20, "r": 20, "t": 40, "b": 20 },
            "xaxis": {
                "type": "date",
                "rangeselector": {
                    "buttons": [
                        { "count": 7, "label": "1w", "step": "day", "stepmode": "backward" },
                        { "count": 1, "label": "1m", "step": "month", "stepmode": "backward" },
                        { "count": 6, "label": "6m", "step": "month", "stepmode": "backward" },
                        { "step": "all" },
                    ],
                    "bgcolor": "#222",
                    "activecolor": ACCENT,
                    "font": { "color": "white" },
                },
                "rangeslider": { "visible": true, "bordercolor": "#444", "bgcolor": "#111" },
            },
            "yaxis": { "title": { "text": "Nombre d'articles" } },
        }),
    );
    Figure::new(vec![trace], layout)
}

/// Horizontal bars, smallest count at the bottom so the leader sits on top.
fn ranking_bar(counts: &[LabelCount], title: &str, colorscale: &str) -> Figure {
    if counts.is_empty() {
        return Figure::empty();
    }

    let ascending: Vec<&LabelCount> = counts.iter().rev().collect();
    let values: Vec<usize> = ascending.iter().map(|c| c.count).collect();
    let trace = json!({
        "type": "bar",
        "orientation": "h",
        "x": values,
        "y": ascending.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
        "marker": { "color": values, "colorscale": colorscale, "showscale": false },
        "hovertemplate": "%{y}: %{x}<extra></extra>",
    });
    let layout = themed(
        Some(title),
        json!({
            "xaxis": { "title": { "text": "Mentions" } },
            "yaxis": { "title": { "text": "" }, "automargin": true },
        }),
    );
    Figure::new(vec![trace], layout)
}

pub fn top_persons_bar(counts: &[LabelCount]) -> Figure {
    ranking_bar(counts, TOP_PERSONS_TITLE, "Teal")
}

pub fn top_locations_bar(counts: &[LabelCount]) -> Figure {
    ranking_bar(counts, TOP_LOCATIONS_TITLE, "Purples")
}

/// Text-only scatter: one trace per word, sized by frequency.
pub fn word_cloud(words: &[CloudWord]) -> Figure {
    if words.is_empty() {
        return Figure::empty();
    }

    let data = words
        .iter()
        .map(|w| {
            json!({
                "type": "scatter",
                "mode": "text",
                "x": [w.x],
                "y": [w.y],
                "text": [w.label],
                "textfont": { "size": w.size, "color": ACCENT },
                "hoverinfo": "text",
                "hovertext": format!("{}: {} mentions", w.label, w.count),
                "showlegend": false,
            })
        })
        .collect();
    let hidden_axis = json!({ "showgrid": false, "showticklabels": false, "zeroline": false });
    let layout = themed(
        Some(WORD_CLOUD_TITLE),
        json!({ "height": 400, "xaxis": hidden_axis, "yaxis": hidden_axis }),
    );
    Figure::new(data, layout)
}

/// Three-level sunburst: root, locations, organisations.
///
/// Node ids are slash-joined paths so the same organisation can appear under
/// several locations. Slashes and backslashes inside labels are escaped.
pub fn sunburst(counts: &[HierarchyCount]) -> Figure {
    if counts.is_empty() {
        return Figure::empty();
    }

    let mut per_location: BTreeMap<&str, usize> = BTreeMap::new();
    for c in counts {
        *per_location.entry(c.location.as_str()).or_default() += c.count;
    }
    let total: usize = per_location.values().sum();

    let mut ids = vec![ROOT_LABEL.to_string()];
    let mut labels = vec![ROOT_LABEL.to_string()];
    let mut parents = vec![String::new()];
    let mut values = vec![total];

    for (location, count) in &per_location {
        ids.push(node_id(ROOT_LABEL, location));
        labels.push((*location).to_string());
        parents.push(ROOT_LABEL.to_string());
        values.push(*count);
    }
    for c in counts {
        let parent = node_id(ROOT_LABEL, &c.location);
        ids.push(node_id(&parent, &c.organization));
        labels.push(c.organization.clone());
        parents.push(parent);
        values.push(c.count);
    }

    let trace = json!({
        "type": "sunburst",
        "ids": ids,
        "labels": labels,
        "parents": parents,
        "values": values,
        "branchvalues": "total",
        "marker": { "colors": values, "colorscale": "Teal" },
        "hovertemplate": "%{label}: %{value}<extra></extra>",
    });
    let layout = themed(
        Some(SUNBURST_TITLE),
        json!({ "margin": { "l": 0, "r": 0, "t": 40, "b": 0 } }),
    );
    Figure::new(vec![trace], layout)
}

fn node_id(parent: &str, label: &str) -> String {
    let mut id = String::with_capacity(parent.len() + label.len() + 1);
    id.push_str(parent);
    id.push('/');
    for c in label.chars() {
        if matches!(c, '/' | '\\') {
            id.push('\\');
        }
        id.push(c);
    }
    id
}

/// Keyword co-occurrence heatmap.
pub fn cooccurrence_heatmap(matrix: &CooccurrenceMatrix) -> Figure {
    if matrix.is_empty() {
        return Figure::empty();
    }

    let trace = json!({
        "type": "heatmap",
        "z": matrix.counts,
        "x": matrix.labels,
        "y": matrix.labels,
        "colorscale": "Viridis",
        "hoverongaps": false,
    });
    let layout = themed(
        Some(HEATMAP_TITLE),
        json!({ "height": 600, "xaxis": { "side": "bottom", "tickangle": -45 } }),
    );
    Figure::new(vec![trace], layout)
}
