use {
    askama::Template,
    axum::{extract::State, response::Html},
    mediascope_analytics::format_thousands,
};

use crate::{error::Result, state::AppState};

/// The single dashboard page. Charts are filled in by `assets/dashboard.js`.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub version: &'static str,
    /// `YYYY-MM-DD`, empty for an empty corpus.
    pub min_date: String,
    pub max_date: String,
    pub keywords: &'a [String],
    pub locations: &'a [String],
    pub total: String,
}

impl<'a> DashboardPage<'a> {
    pub fn new(state: &'a AppState) -> Self {
        let day = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        Self {
            version: env!("CARGO_PKG_VERSION"),
            min_date: day(state.options.min_date),
            max_date: day(state.options.max_date),
            keywords: &state.options.keywords,
            locations: &state.options.locations,
            total: format_thousands(state.corpus.len()),
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(DashboardPage::new(&state).render()?))
}
