//! Plotly figure envelope and the shared dark theme.

use {
    serde::Serialize,
    serde_json::{Value, json},
};

pub const ACCENT: &str = "#00bc8c";
pub const FONT_COLOR: &str = "#e0e0e0";
pub const FONT_FAMILY: &str = "Inter, sans-serif";
pub const GRID_COLOR: &str = "rgba(255,255,255,0.1)";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// A figure as plotly.js consumes it: `Plotly.react(el, fig.data, fig.layout)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Blank figure shown when a panel has nothing to plot.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            layout: themed(None, json!({})),
        }
    }

    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Title text, if the layout carries one.
    pub fn title(&self) -> Option<&str> {
        self.layout.pointer("/title/text").and_then(Value::as_str)
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::empty()
    }
}

/// Dark, transparent layout with `overrides` merged on top (one level deep).
pub(crate) fn themed(title: Option<&str>, overrides: Value) -> Value {
    let mut layout = json!({
        "paper_bgcolor": TRANSPARENT,
        "plot_bgcolor": TRANSPARENT,
        "font": { "family": FONT_FAMILY, "color": FONT_COLOR },
        "xaxis": { "gridcolor": GRID_COLOR, "zerolinecolor": GRID_COLOR },
        "yaxis": { "gridcolor": GRID_COLOR, "zerolinecolor": GRID_COLOR },
    });
    if let Some(title) = title {
        layout["title"] = json!({ "text": title, "font": { "size": 16 } });
    }
    merge(&mut layout, overrides);
    layout
}

fn merge(base: &mut Value, overrides: Value) {
    let (Some(base), Value::Object(overrides)) = (base.as_object_mut(), overrides) else {
        return;
    };
    for (key, value) in overrides {
        let slot = base.entry(key).or_insert(Value::Null);
        match (slot, value) {
            (Value::Object(existing), Value::Object(extra)) => existing.extend(extra),
            (slot, value) => *slot = value,
        }
    }
}
